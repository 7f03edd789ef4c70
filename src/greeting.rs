/// Target used when the caller does not name one.
pub const DEFAULT_TARGET: &str = "World";

/// Just another variation on "hello, world!".
///
/// The target is echoed verbatim; `None` greets [`DEFAULT_TARGET`].
///
/// ```
/// use template::greeting::hi;
///
/// assert_eq!(hi(Some("Mom")), "Hello, Mom!");
/// assert_eq!(hi(None), "Hello, World!");
/// ```
#[must_use]
pub fn hi(target: Option<&str>) -> String {
    let target = target.unwrap_or(DEFAULT_TARGET);
    format!("Hello, {target}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hi_without_argument_greets_world() {
        assert_eq!(hi(None), "Hello, World!");
    }

    #[test]
    fn hi_with_arguments() {
        for target in [Some("olleh"), Some("Mom"), None] {
            let expected = format!("Hello, {}!", target.unwrap_or("World"));
            assert_eq!(hi(target), expected);
        }
    }

    #[test]
    fn hi_keeps_target_verbatim() {
        assert_eq!(hi(Some("")), "Hello, !");
        assert_eq!(hi(Some("  world ")), "Hello,   world !");
        assert_eq!(hi(Some("WORLD")), "Hello, WORLD!");
    }

    #[test]
    fn hi_is_stable_across_calls() {
        assert_eq!(hi(Some("Mom")), hi(Some("Mom")));
        assert_eq!(hi(None), hi(None));
    }
}
