//! Config text helpers.

/// Replace every `${NAME}` with the value of the environment variable
/// `NAME`.
///
/// Unset variables expand to an empty string. A `${` without a closing
/// brace is kept as written.
pub fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        if let Ok(value) = std::env::var(&after[..end]) {
            out.push_str(&value);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::expand_env_vars;

    #[test]
    fn plain_text_untouched() {
        assert_eq!(expand_env_vars("a = \"$b\""), "a = \"$b\"");
    }

    #[test]
    fn unterminated_kept() {
        assert_eq!(expand_env_vars("key = \"${OPEN"), "key = \"${OPEN");
    }

    #[test]
    fn unset_is_empty() {
        assert_eq!(expand_env_vars("x${CHATTGP_UTILS_SURELY_UNSET_VAR}y"), "xy");
    }
}
