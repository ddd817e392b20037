const ATCODER_URL: &str = "https://atcoder.jp";

/// Public AtCoder profile of a user.
pub fn profile_url(user: &str) -> String {
    format!("{ATCODER_URL}/users/{user}")
}

/// Standings of ABC `abc`, focused on `user`.
pub fn standings_url(abc: u32, user: &str) -> String {
    format!("{ATCODER_URL}/contests/abc{abc:03}/standings?watching={user}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        assert_eq!(profile_url("lX57"), "https://atcoder.jp/users/lX57");
        assert_eq!(
            standings_url(412, "lX57"),
            "https://atcoder.jp/contests/abc412/standings?watching=lX57"
        );
        assert_eq!(
            standings_url(42, "nigs"),
            "https://atcoder.jp/contests/abc042/standings?watching=nigs"
        );
    }
}
