use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::features::categories::Category;
use crate::shared::constants::{QR_PREFIX_LEN, QR_SEQUENCE_SPACE, QR_SUFFIX_LEN};
use crate::shared::validation::hyphenate_whitespace;

/// Source of the 3-digit sequence embedded in a QR code
pub trait SequenceSource: Send + Sync {
    /// Draw a value in `0..QR_SEQUENCE_SPACE`
    fn draw(&mut self) -> u16;
}

/// Uniformly random sequence values
pub struct RandomSequence {
    rng: StdRng,
}

impl RandomSequence {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for RandomSequence {
    fn draw(&mut self) -> u16 {
        self.rng.gen_range(0..QR_SEQUENCE_SPACE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("All 1000 QR sequence values for '{stem}' are taken")]
pub struct QrCodeExhausted {
    pub stem: String,
}

/// Build `QR<seq>-<PREFIX>-<SUFFIX>`.
///
/// The prefix is the first 3 characters of the uppercased category label; the
/// suffix is the uppercased name with whitespace runs hyphenated, cut to 10 characters.
pub fn compose_qr_code(sequence: u16, category: Category, name: &str) -> String {
    format!(
        "QR{:03}-{}",
        sequence % QR_SEQUENCE_SPACE,
        qr_stem(category, name)
    )
}

fn qr_stem(category: Category, name: &str) -> String {
    let prefix: String = category
        .label()
        .to_uppercase()
        .chars()
        .take(QR_PREFIX_LEN)
        .collect();
    let suffix: String = hyphenate_whitespace(&name.to_uppercase())
        .chars()
        .take(QR_SUFFIX_LEN)
        .collect();
    format!("{}-{}", prefix, suffix)
}

/// Draw a QR code that `is_taken` does not already know about.
///
/// The first value comes from `source`; on collision the sequence is stepped
/// upward (wrapping at 1000) until a free code is found.
pub fn synthesize_qr_code(
    source: &mut dyn SequenceSource,
    category: Category,
    name: &str,
    is_taken: impl Fn(&str) -> bool,
) -> Result<String, QrCodeExhausted> {
    let start = source.draw() % QR_SEQUENCE_SPACE;

    for offset in 0..QR_SEQUENCE_SPACE {
        let sequence = (start + offset) % QR_SEQUENCE_SPACE;
        let candidate = compose_qr_code(sequence, category, name);
        if !is_taken(&candidate) {
            if offset > 0 {
                tracing::debug!(
                    "QR sequence {:03} collided, settled on {} after {} attempts",
                    start,
                    candidate,
                    offset
                );
            }
            return Ok(candidate);
        }
    }

    Err(QrCodeExhausted {
        stem: qr_stem(category, name),
    })
}
