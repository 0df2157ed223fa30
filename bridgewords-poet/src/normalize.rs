//! Token normalisation shared by corpus indexing and poem generation.
//!
//! A character counts as a word character when [`char::is_alphanumeric`]
//! holds. Everything else is punctuation.

/// Strips punctuation from `token` and lowercases what remains.
///
/// Returns an empty string when `token` holds no word characters.
///
/// # Examples
/// ```
/// use bridgewords_poet::normalize_word;
///
/// assert_eq!(normalize_word("Civilizations!"), "civilizations");
/// assert_eq!(normalize_word("don't"), "dont");
/// assert_eq!(normalize_word("--"), "");
/// ```
#[must_use]
pub fn normalize_word(token: &str) -> String {
    let body: String = token.chars().filter(|ch| ch.is_alphanumeric()).collect();
    body.to_lowercase()
}

/// An input token split into its word characters and its punctuation.
///
/// Both halves keep the order and case they had in the original token.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Token {
    body: String,
    punctuation: String,
}

impl Token {
    /// Splits `raw` into word characters and punctuation.
    ///
    /// # Examples
    /// ```
    /// use bridgewords_poet::Token;
    ///
    /// let token = Token::parse("(New!)");
    /// assert_eq!(token.body(), "New");
    /// assert_eq!(token.punctuation(), "(!)");
    /// assert_eq!(token.normalized(), "new");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let (body, punctuation) = raw.chars().partition(|ch| ch.is_alphanumeric());
        Self { body, punctuation }
    }

    /// Returns the word characters in their original case.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the punctuation characters.
    #[must_use]
    pub fn punctuation(&self) -> &str {
        &self.punctuation
    }

    /// Returns the lowercase key used for graph lookups.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.body.to_lowercase()
    }

    /// Appends the token as it appears in a poem: body, then punctuation.
    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str(&self.body);
        out.push_str(&self.punctuation);
    }
}
