use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::error::{CalcError, Result};

/// A single-slot numeric memory, as found on a pocket calculator.
///
/// The slot is either empty or holds one `f64`; an empty slot is distinct
/// from a stored zero. Every operation takes the internal lock, so one
/// `Memory` can be shared between threads (for example behind an `Arc`)
/// without losing concurrent updates.
///
/// ## Example
/// ```
/// use exprcalc::Memory;
///
/// let memory = Memory::new();
/// assert_eq!(memory.recall(), None);
///
/// memory.store(0.0).unwrap();
/// assert_eq!(memory.recall(), Some(0.0));
/// assert!(memory.store(f64::NAN).is_err());
///
/// memory.clear();
/// assert_eq!(memory.recall(), None);
/// ```
#[derive(Debug, Default)]
pub struct Memory {
    slot: Mutex<Option<f64>>,
}

impl Memory {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }

    /// Replaces the stored value with `value`.
    ///
    /// NaN is refused: it serializes as `null`, the same as an empty slot.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidValue`] for NaN. The memory is left
    /// untouched.
    pub fn store(&self, value: f64) -> Result<()> {
        if value.is_nan() {
            warn!("rejected NaN memory value");
            return Err(CalcError::InvalidValue { text: value.to_string() });
        }
        trace!(value, "memory store");
        *self.slot.lock() = Some(value);
        Ok(())
    }

    /// Coerces `text` to a number and stores it.
    ///
    /// Surrounding whitespace is ignored. Anything `f64` parsing accepts is
    /// stored, including `1e3` and `inf`; NaN never is.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidValue`] if `text` is not numeric. The
    /// memory is left untouched.
    ///
    /// ## Example
    /// ```
    /// use exprcalc::Memory;
    ///
    /// let memory = Memory::new();
    /// assert_eq!(memory.store_str(" -2.5 "), Ok(-2.5));
    /// assert!(memory.store_str("twelve").is_err());
    /// assert_eq!(memory.recall(), Some(-2.5));
    /// ```
    pub fn store_str(&self, text: &str) -> Result<f64> {
        let value = text.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|v| !v.is_nan())
                        .ok_or_else(|| {
                            warn!(text, "rejected non-numeric memory value");
                            CalcError::InvalidValue { text: text.to_string() }
                        })?;
        self.store(value)?;
        Ok(value)
    }

    /// Returns the stored value, or `None` when the memory is empty.
    #[must_use]
    pub fn recall(&self) -> Option<f64> {
        *self.slot.lock()
    }

    /// Empties the memory.
    pub fn clear(&self) {
        trace!("memory clear");
        *self.slot.lock() = None;
    }
}
