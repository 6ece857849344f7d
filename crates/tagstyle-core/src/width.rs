//! Target line width for splitting and formatting.

use crate::error::{Result, TagstyleError};

/// How text is broken into lines.
///
/// Public APIs take an `Option<isize>` width; this type is its normalised
/// form. `None` and negative values are [`Width::Unbounded`], `0` is
/// [`Width::Segments`] and anything positive is [`Width::Columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// No wrapping at all. Text is wrapped with its open tags once.
    #[default]
    Unbounded,
    /// Every text segment is wrapped with its open tags, but no line
    /// breaks are inserted beyond those already present.
    Segments,
    /// Column-bounded wrapping, counted in code points.
    Columns(usize),
}

impl Width {
    /// Normalise a caller-supplied width. Negative values mean unbounded.
    ///
    /// # Example
    ///
    /// ```
    /// use tagstyle_core::Width;
    /// assert_eq!(Width::lenient(None), Width::Unbounded);
    /// assert_eq!(Width::lenient(Some(-3)), Width::Unbounded);
    /// assert_eq!(Width::lenient(Some(0)), Width::Segments);
    /// assert_eq!(Width::lenient(Some(6)), Width::Columns(6));
    /// ```
    pub fn lenient(width: Option<isize>) -> Self {
        match width {
            None => Width::Unbounded,
            Some(w) if w < 0 => Width::Unbounded,
            Some(0) => Width::Segments,
            Some(w) => Width::Columns(w.unsigned_abs()),
        }
    }

    /// Like [`Width::lenient`] but rejects negative values.
    ///
    /// Used where a width comes straight from the user (command line,
    /// configuration file).
    ///
    /// # Errors
    ///
    /// Returns [`TagstyleError::InvalidArgument`] for a negative width.
    pub fn strict(width: Option<isize>) -> Result<Self> {
        match width {
            Some(w) if w < 0 => Err(TagstyleError::invalid(format!(
                "invalid width {}: expected a non-negative integer",
                w
            ))),
            other => Ok(Self::lenient(other)),
        }
    }

    /// Back to the signed optional form taken by the public APIs.
    pub fn as_option(&self) -> Option<isize> {
        match self {
            Width::Unbounded => None,
            Width::Segments => Some(0),
            Width::Columns(n) => Some(isize::try_from(*n).unwrap_or(isize::MAX)),
        }
    }
}

impl From<usize> for Width {
    fn from(width: usize) -> Self {
        if width == 0 {
            Width::Segments
        } else {
            Width::Columns(width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient() {
        assert_eq!(Width::lenient(None), Width::Unbounded);
        assert_eq!(Width::lenient(Some(-1)), Width::Unbounded);
        assert_eq!(Width::lenient(Some(0)), Width::Segments);
        assert_eq!(Width::lenient(Some(80)), Width::Columns(80));
    }

    #[test]
    fn test_strict_rejects_negative() {
        let err = Width::strict(Some(-3)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(Width::strict(Some(3)).unwrap(), Width::Columns(3));
        assert_eq!(Width::strict(None).unwrap(), Width::Unbounded);
    }

    #[test]
    fn test_as_option_roundtrip() {
        for w in [None, Some(0), Some(12)] {
            assert_eq!(Width::lenient(w).as_option(), w);
        }
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Width::from(0), Width::Segments);
        assert_eq!(Width::from(7), Width::Columns(7));
    }
}
