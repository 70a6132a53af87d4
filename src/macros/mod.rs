// std::borrow::Cow

/// Takes the owned value out of a `Cow`, or evaluates `$default` when the
/// `Cow` is borrowed.
///
/// Regex replacements return `Cow::Borrowed` when nothing matched, in which
/// case the input we already own can be kept instead of copying it.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
