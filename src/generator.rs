use crate::charset::{CharacterClass, ClassSet};
use crate::error::GenerationError;
use crate::random::{OsSource, RandomSource};
use log::debug;
use zeroize::Zeroizing;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 1000;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GenerationError::invalid_length(self.length));
        }
        if self.classes.is_empty() {
            return Err(GenerationError::NoClassSelected);
        }
        Ok(())
    }

    pub fn charset_size(&self) -> usize {
        self.classes.iter().map(|c| c.alphabet().len()).sum()
    }

    /// Upper bound on entropy if every position were drawn from the full
    /// combined alphabet.
    pub fn entropy_bits(&self) -> f64 {
        let size = self.charset_size();
        if size == 0 {
            return 0.0;
        }
        self.length as f64 * (size as f64).log2()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::empty()
                .with(CharacterClass::Uppercase)
                .with(CharacterClass::Lowercase)
                .with(CharacterClass::Digit),
        }
    }
}

/// Parses user-entered length text. Never clamps.
pub fn parse_length(text: &str) -> Result<usize, GenerationError> {
    let trimmed = text.trim();
    let length: usize = trimmed
        .parse()
        .map_err(|_| GenerationError::invalid_length(trimmed))?;

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GenerationError::invalid_length(trimmed));
    }

    Ok(length)
}

/// Builds a password with one character from every enabled class (as far as
/// the length allows), fills the rest from the combined alphabet, then
/// shuffles.
///
/// When `length` is smaller than the number of enabled classes only the
/// first `length` classes in canonical order are seeded, so the output never
/// exceeds the requested length.
pub fn generate<R>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerationError>
where
    R: RandomSource + ?Sized,
{
    request.validate()?;

    debug!(
        "Generating password: length={}, classes=[{}]",
        request.length, request.classes
    );

    let alphabet = Zeroizing::new(request.classes.alphabet());
    let mut chars = Zeroizing::new(Vec::with_capacity(request.length));

    for class in request.classes.iter().take(request.length) {
        chars.push(pick(class.alphabet(), rng));
    }

    while chars.len() < request.length {
        chars.push(alphabet[rng.below(alphabet.len())]);
    }

    shuffle(&mut chars, rng);

    Ok(Zeroizing::new(chars.iter().collect()))
}

pub fn generate_with_os_rng(
    request: &GenerationRequest,
) -> Result<Zeroizing<String>, GenerationError> {
    generate(request, &mut OsSource)
}

fn pick<R: RandomSource + ?Sized>(alphabet: &str, rng: &mut R) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.below(bytes.len())] as char
}

/// Fisher-Yates, descending index, `j` drawn from `[0, i]`.
fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
