use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftSquare,
    RightSquare,

    Semicolon,
    Colon,
    Comma,
    Dot,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,

    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Identifier,
    String,
    Number,

    Begin,
    End,
    True,
    False,
    Null,
    And,
    Or,
    Int,
    Float,
    Set,
    Array,
    Input,
    If,
    Then,
    Else,
    EndIf,
    For,
    EndFor,
    While,
    Break,
    EndWhile,
    Do,
    EndDo,
    Print,
    Routine,
    EndRoutine,
    Call,
    Return,
    Foreign,
    Container,
    EndContainer,

    Indent,
    Newline,
    Error,
    Eof,
}

// The table of reserved words and their associated token kinds.
static KEYWORDS: &[(&str, TokenKind)] = &[
    ("Begin", TokenKind::Begin),
    ("End", TokenKind::End),
    ("True", TokenKind::True),
    ("False", TokenKind::False),
    ("Null", TokenKind::Null),
    ("And", TokenKind::And),
    ("Or", TokenKind::Or),
    ("Int", TokenKind::Int),
    ("Float", TokenKind::Float),
    ("Set", TokenKind::Set),
    ("Array", TokenKind::Array),
    ("Input", TokenKind::Input),
    ("If", TokenKind::If),
    ("Then", TokenKind::Then),
    ("Else", TokenKind::Else),
    ("EndIf", TokenKind::EndIf),
    ("For", TokenKind::For),
    ("EndFor", TokenKind::EndFor),
    ("While", TokenKind::While),
    ("Break", TokenKind::Break),
    ("EndWhile", TokenKind::EndWhile),
    ("Do", TokenKind::Do),
    ("EndDo", TokenKind::EndDo),
    ("Print", TokenKind::Print),
    ("Routine", TokenKind::Routine),
    ("EndRoutine", TokenKind::EndRoutine),
    ("Call", TokenKind::Call),
    ("Return", TokenKind::Return),
    ("Foreign", TokenKind::Foreign),
    ("Container", TokenKind::Container),
    ("EndContainer", TokenKind::EndContainer),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub file: Rc<str>,
    pub line: usize,
}

// Cursor over one file's source text.
struct Scanner<'a> {
    src: &'a [u8],
    start: usize,
    current: usize,
    file: Rc<str>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a [u8], file: Rc<str>) -> Self {
        Self {
            src,
            start: 0,
            current: 0,
            file,
            line: 1,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.src.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.src[self.current];
        self.current += 1;
        byte
    }

    fn peek(&self) -> u8 {
        self.src.get(self.current).copied().unwrap_or(0)
    }

    fn peek_next(&self) -> u8 {
        self.src.get(self.current + 1).copied().unwrap_or(0)
    }

    fn matches(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.src[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn rest(&self) -> &'a [u8] {
        &self.src[self.current..]
    }

    fn make(&self, kind: TokenKind) -> Token {
        Token {
            kind,
            lexeme: String::from_utf8_lossy(&self.src[self.start..self.current]).into_owned(),
            file: Rc::clone(&self.file),
            line: self.line,
        }
    }

    fn error_token(&self, message: &str) -> Token {
        Token {
            kind: TokenKind::Error,
            lexeme: message.to_owned(),
            file: Rc::clone(&self.file),
            line: self.line,
        }
    }
}

fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

fn identifier(s: &mut Scanner) -> Token {
    while is_alphanumeric(s.peek()) {
        s.advance();
    }

    // See if the identifier is a reserved word.
    let text = &s.src[s.start..s.current];
    let kind = KEYWORDS
        .iter()
        .find(|(name, _)| name.as_bytes() == text)
        .map_or(TokenKind::Identifier, |&(_, kind)| kind);

    s.make(kind)
}

fn number(s: &mut Scanner) -> Token {
    while s.peek().is_ascii_digit() {
        s.advance();
    }

    // A fractional part only counts when a digit follows the dot.
    if s.peek() == b'.' && s.peek_next().is_ascii_digit() {
        s.advance();
        while s.peek().is_ascii_digit() {
            s.advance();
        }
    }

    s.make(TokenKind::Number)
}

fn string(s: &mut Scanner) -> Token {
    while !s.is_at_end() && s.peek() != b'"' {
        if s.peek() == b'\n' {
            s.line += 1;
        } else if s.peek() == b'\\' && s.peek_next() == b'"' {
            s.advance();
        }
        s.advance();
    }

    if s.is_at_end() {
        return s.error_token("Unterminated string.");
    }

    // The closing quote.
    s.advance();
    s.make(TokenKind::String)
}

// Consumes a line holding nothing but whitespace or a comment. Leaves the
// cursor untouched when the line carries real tokens.
fn skip_empty_line(s: &mut Scanner) -> bool {
    let bak = s.current;
    let mut has_other_chars = false;
    while !s.is_at_end() && s.peek() != b'\n' {
        if !matches!(s.peek(), b' ' | b'\t' | b'\r') {
            has_other_chars = true;
            break;
        }
        s.advance();
    }
    if s.is_at_end() && !has_other_chars {
        return false;
    }
    if !has_other_chars {
        s.advance();
        s.line += 1;
        return true;
    }
    if s.peek() == b'/' && s.peek_next() == b'/' {
        while !s.is_at_end() && s.peek() != b'\n' {
            s.advance();
        }
        if !s.is_at_end() {
            s.advance();
            s.line += 1;
        }
        return true;
    }
    if s.peek() == b'/' && s.peek_next() == b'*' {
        while !s.is_at_end() && !(s.peek() == b'*' && s.peek_next() == b'/') {
            if s.peek() == b'\n' {
                s.line += 1;
            }
            s.advance();
        }
        if !s.is_at_end() {
            s.current += 2;
            if s.peek() == b'\n' {
                s.advance();
                s.line += 1;
            }
        }
        return true;
    }
    s.current = bak;
    false
}

/// Scanning context for one lexer run: the pending-include stack, the set
/// of files ever queued, and the accumulated error count. Several runs can
/// coexist in one process; nothing here is global.
pub struct Tokenizer {
    queue: Vec<PathBuf>,
    visited: HashSet<PathBuf>,
    errors: usize,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            visited: HashSet::new(),
            errors: 0,
        }
    }

    /// Number of lexical errors reported so far, across every file of the
    /// run. Callers decide after the full pass whether to go on.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Scans `root` and every file it transitively includes into one token
    /// sequence terminated by a single `Eof`. Returns `None` when the root
    /// itself cannot be read.
    pub fn tokenize(&mut self, root: impl AsRef<Path>) -> Option<Vec<Token>> {
        let root = root.as_ref().to_path_buf();
        self.visited.insert(root.clone());

        let source = match fs::read(&root) {
            Ok(source) => source,
            Err(err) => {
                error!("unable to open file '{}': {}", root.display(), err);
                self.errors += 1;
                return None;
            }
        };

        let file: Rc<str> = Rc::from(root.to_string_lossy().as_ref());
        let mut tokens = Vec::new();
        self.scan(&source, Rc::clone(&file), &mut tokens);

        let line = tokens.last().map_or(1, |t| t.line);
        tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            file,
            line,
        });
        Some(tokens)
    }

    /// Scans an in-memory source through the same machinery. Include
    /// directives still resolve against the filesystem.
    pub fn tokenize_source(&mut self, source: &str, name: &str) -> Vec<Token> {
        let file: Rc<str> = Rc::from(name);
        let mut tokens = Vec::new();
        self.scan(source.as_bytes(), Rc::clone(&file), &mut tokens);

        let line = tokens.last().map_or(1, |t| t.line);
        tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            file,
            line,
        });
        tokens
    }

    fn scan(&mut self, source: &[u8], file: Rc<str>, tokens: &mut Vec<Token>) {
        let mut scanner = Scanner::new(source, file);
        self.skip_interstitial(&mut scanner, tokens);
        loop {
            let token = self.scan_token(&mut scanner);
            if token.kind == TokenKind::Eof {
                break;
            }
            let newline = token.kind == TokenKind::Newline;
            tokens.push(token);
            if newline {
                self.skip_interstitial(&mut scanner, tokens);
            }
        }
    }

    // Blank lines, comments, and include directives may appear wherever a
    // statement could start; consume them until real tokens resume. An
    // include splices the named file's tokens in right here, ahead of the
    // current file's remainder.
    fn skip_interstitial(&mut self, s: &mut Scanner, tokens: &mut Vec<Token>) {
        loop {
            if skip_empty_line(s) {
                continue;
            }
            if self.check_include(s) {
                self.drain_queue(tokens);
                continue;
            }
            break;
        }
    }

    fn drain_queue(&mut self, tokens: &mut Vec<Token>) {
        while let Some(path) = self.queue.pop() {
            match fs::read(&path) {
                Ok(source) => {
                    let file: Rc<str> = Rc::from(path.to_string_lossy().as_ref());
                    self.scan(&source, file, tokens);
                }
                Err(err) => {
                    error!("unable to open file '{}': {}", path.display(), err);
                    self.errors += 1;
                }
            }
        }
    }

    fn check_include(&mut self, s: &mut Scanner) -> bool {
        if !s.rest().starts_with(b"Include ") {
            return false;
        }
        s.current += 8;

        let start = s.current;
        while !s.is_at_end() && s.peek() != b'\n' && s.peek() != b'\r' {
            s.advance();
        }
        let raw = String::from_utf8_lossy(&s.src[start..s.current]);
        let path = raw.trim();
        let path = path
            .strip_prefix('"')
            .and_then(|p| p.strip_suffix('"'))
            .unwrap_or(path);
        debug!("include directive for '{}'", path);
        self.enqueue(PathBuf::from(path));

        while !s.is_at_end() && s.peek() != b'\n' {
            s.advance();
        }
        if !s.is_at_end() {
            s.advance();
            s.line += 1;
        }
        true
    }

    // Each path is scanned at most once per run, no matter how often or
    // how cyclically it is included.
    fn enqueue(&mut self, path: PathBuf) {
        if self.visited.insert(path.clone()) {
            self.queue.push(path);
        } else {
            debug!("skipping already included file '{}'", path.display());
        }
    }

    fn scan_token(&mut self, s: &mut Scanner) -> Token {
        loop {
            s.start = s.current;

            if s.is_at_end() {
                return s.make(TokenKind::Eof);
            }

            let c = s.advance();

            if is_alpha(c) {
                return identifier(s);
            }
            if c.is_ascii_digit() {
                return number(s);
            }

            match c {
                b' ' => {
                    let mut count = 1;
                    while s.peek() == b' ' && count < 4 {
                        count += 1;
                        s.advance();
                    }
                    if count == 4 {
                        return s.make(TokenKind::Indent);
                    }
                    // Shorter space runs carry no structure.
                }
                b'\r' => {
                    if s.matches(b'\n') {
                        s.line += 1;
                        return s.make(TokenKind::Newline);
                    }
                    // A stray \r is dropped.
                }
                b'\n' => {
                    s.line += 1;
                    return s.make(TokenKind::Newline);
                }
                b'\t' => return s.make(TokenKind::Indent),
                b'(' => return s.make(TokenKind::LeftParen),
                b')' => return s.make(TokenKind::RightParen),
                b'{' => return s.make(TokenKind::LeftBrace),
                b'}' => return s.make(TokenKind::RightBrace),
                b'[' => return s.make(TokenKind::LeftSquare),
                b']' => return s.make(TokenKind::RightSquare),
                b';' => return s.make(TokenKind::Semicolon),
                b':' => return s.make(TokenKind::Colon),
                b',' => return s.make(TokenKind::Comma),
                b'.' => return s.make(TokenKind::Dot),
                b'-' => return s.make(TokenKind::Minus),
                b'+' => return s.make(TokenKind::Plus),
                b'/' => {
                    // A slash opening "//" or "/*" is a comment, never
                    // division.
                    if s.matches(b'/') {
                        while !s.is_at_end() && s.peek() != b'\n' {
                            s.advance();
                        }
                    } else if s.matches(b'*') {
                        while !s.is_at_end() && !(s.peek() == b'*' && s.peek_next() == b'/') {
                            if s.peek() == b'\n' {
                                s.line += 1;
                            }
                            s.advance();
                        }
                        if !s.is_at_end() {
                            s.current += 2;
                        }
                    } else {
                        return s.make(TokenKind::Slash);
                    }
                }
                b'*' => return s.make(TokenKind::Star),
                b'%' => return s.make(TokenKind::Percent),
                b'^' => return s.make(TokenKind::Caret),
                b'!' => {
                    let kind = if s.matches(b'=') {
                        TokenKind::BangEqual
                    } else {
                        TokenKind::Bang
                    };
                    return s.make(kind);
                }
                b'=' => {
                    let kind = if s.matches(b'=') {
                        TokenKind::EqualEqual
                    } else {
                        TokenKind::Equal
                    };
                    return s.make(kind);
                }
                b'<' => {
                    let kind = if s.matches(b'=') {
                        TokenKind::LessEqual
                    } else {
                        TokenKind::Less
                    };
                    return s.make(kind);
                }
                b'>' => {
                    let kind = if s.matches(b'=') {
                        TokenKind::GreaterEqual
                    } else {
                        TokenKind::Greater
                    };
                    return s.make(kind);
                }
                b'"' => return string(s),
                _ => {
                    error!(
                        "[{}:{}] unexpected character '{}'",
                        s.file, s.line, c as char
                    );
                    self.errors += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Tokenizer::new()
            .tokenize_source(source, "test")
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("basil-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("Set answer = 42"),
            vec![
                TokenKind::Set,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );

        // Reserved words match exactly; near-misses are identifiers.
        assert_eq!(
            kinds("While while EndWhile Ends"),
            vec![
                TokenKind::While,
                TokenKind::Identifier,
                TokenKind::EndWhile,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );

        let tokens = Tokenizer::new().tokenize_source("Set x_1 = 1", "test");
        assert_eq!(tokens[1].lexeme, "x_1");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("== != <= >= = < > ! + - * / % ^"),
            vec![
                TokenKind::EqualEqual,
                TokenKind::BangEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Bang,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = Tokenizer::new().tokenize_source("3.14", "test");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "3.14");

        // A dot without a following digit stays its own token.
        assert_eq!(
            kinds("3."),
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
        );
    }

    #[test]
    fn test_indentation() {
        assert_eq!(
            kinds("    x"),
            vec![TokenKind::Indent, TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(
            kinds("\tx"),
            vec![TokenKind::Indent, TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(
            kinds("        x"),
            vec![
                TokenKind::Indent,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        // Fewer than four spaces are not structure.
        assert_eq!(kinds("  x"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_newlines_and_line_numbers() {
        let tokens = Tokenizer::new().tokenize_source("Set x = 1\nSet y = 2", "test");
        assert_eq!(tokens[4].kind, TokenKind::Newline);
        assert_eq!(tokens[5].kind, TokenKind::Set);
        assert_eq!(tokens[5].line, 2);

        // \r\n collapses into one newline token; a stray \r vanishes.
        assert_eq!(
            kinds("x\r\ny"),
            vec![
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("x\ry"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            kinds("// whole line\nSet"),
            vec![TokenKind::Set, TokenKind::Eof]
        );
        assert_eq!(
            kinds("1 // trailing\n2"),
            vec![
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("1 /* inline */ 2"),
            vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
        );
        // Division survives; only "//" and "/*" open comments.
        assert_eq!(
            kinds("1 / 2"),
            vec![
                TokenKind::Number,
                TokenKind::Slash,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );

        let tokens = Tokenizer::new().tokenize_source("/* a\nb */\nSet x = 1", "test");
        assert_eq!(tokens[0].kind, TokenKind::Set);
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_strings() {
        let tokens = Tokenizer::new().tokenize_source("\"hello\"", "test");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"hello\"");

        // Escaped quotes stay inside the string.
        let tokens = Tokenizer::new().tokenize_source("\"a \\\" b\"", "test");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"a \\\" b\"");

        // Embedded newlines advance the line counter.
        let tokens = Tokenizer::new().tokenize_source("\"a\nb\" x", "test");
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize_source("\"abc", "test");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "Unterminated string.");
    }

    #[test]
    fn test_unknown_character_is_counted_and_skipped() {
        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize_source("@ Set #", "test");
        assert_eq!(tokenizer.error_count(), 2);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Set, TokenKind::Eof]);
    }

    #[test]
    fn test_single_trailing_eof() {
        let tokens = Tokenizer::new().tokenize_source("Set x = 1\n", "test");
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_include_splices_at_directive() {
        let dir = temp_dir("splice");
        let b = dir.join("b.lang");
        fs::write(&b, "Set y = 2\n").unwrap();
        let a = dir.join("a.lang");
        fs::write(
            &a,
            format!("Set x = 1\nInclude {}\nSet z = 3\n", b.display()),
        )
        .unwrap();

        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(&a).unwrap();
        assert_eq!(tokenizer.error_count(), 0);

        let names: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme.as_str())
            .collect();
        // b.lang's tokens land between the include point's neighbors.
        assert_eq!(names, vec!["x", "y", "z"]);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_include_path_may_be_quoted() {
        let dir = temp_dir("quoted");
        let b = dir.join("b.lang");
        fs::write(&b, "Set y = 2\n").unwrap();
        let a = dir.join("a.lang");
        fs::write(&a, format!("Include \"{}\"\nSet x = 1\n", b.display())).unwrap();

        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(&a).unwrap();
        assert_eq!(tokenizer.error_count(), 0);
        let names: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(names, vec!["y", "x"]);
    }

    #[test]
    fn test_repeated_include_is_ignored() {
        let dir = temp_dir("dedup");
        let b = dir.join("b.lang");
        fs::write(&b, "Set y = 2\n").unwrap();
        let a = dir.join("a.lang");
        fs::write(
            &a,
            format!(
                "Include {}\nSet x = 1\nInclude {}\nSet z = 3\n",
                b.display(),
                b.display()
            ),
        )
        .unwrap();

        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(&a).unwrap();
        let names: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(names, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_cyclic_includes_terminate() {
        let dir = temp_dir("cycle");
        let a = dir.join("a.lang");
        let b = dir.join("b.lang");
        fs::write(&a, format!("Set x = 1\nInclude {}\n", b.display())).unwrap();
        fs::write(&b, format!("Set y = 2\nInclude {}\n", a.display())).unwrap();

        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(&a).unwrap();
        let names: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_missing_include_is_counted_and_scanning_continues() {
        let dir = temp_dir("missing");
        let a = dir.join("a.lang");
        fs::write(&a, "Include /nonexistent/nowhere.lang\nSet x = 1\n").unwrap();

        let mut tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize(&a).unwrap();
        assert_eq!(tokenizer.error_count(), 1);
        let names: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(names, vec!["x"]);
    }

    #[test]
    fn test_unreadable_root_returns_none() {
        let mut tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("/nonexistent/root.lang").is_none());
        assert_eq!(tokenizer.error_count(), 1);
    }
}
