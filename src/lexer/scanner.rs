use super::token::Token;

/// Scanner for parenthesized arithmetic source text
pub struct Scanner {
    /// Source text as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Literal characters seen but not yet flushed into a token
    pending: String,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner from source text
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            pending: String::new(),
            current: 0,
        }
    }

    /// Scans all tokens from the source text and returns them as a vector
    ///
    /// Scanning is total: every input produces a token list, so there is no
    /// `Result` here. Malformed parenthesis structure is the tree builder's
    /// problem.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            let c = self.advance();
            self.scan_char(c);
        }
        self.flush_pending();

        self.tokens.clone()
    }

    fn scan_char(&mut self, c: char) {
        match c {
            // Whitespace terminates an in-progress literal and is dropped.
            // Newline gets the same treatment as space: a literal never
            // spans a line break.
            ' ' | '\n' => self.flush_pending(),

            '(' => {
                self.flush_pending();
                self.tokens.push(Token::LeftBracket);
            }
            ')' => {
                self.flush_pending();
                self.tokens.push(Token::RightBracket);
            }

            // Everything else accumulates into the pending literal
            _ => self.pending.push(c),
        }
    }

    /// Moves the pending literal buffer, if non-empty, into a token
    fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.tokens.push(Token::Literal(text));
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }
}
