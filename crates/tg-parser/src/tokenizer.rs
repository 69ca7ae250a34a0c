//! Logos-based tokenizer for media release filenames.
//!
//! Only the distinctions the title/episode heuristics need are kept: episode
//! markers, years, resolutions and a single [`Token::Keyword`] bucket for the
//! scene vocabulary (sources, codecs, audio, HDR, editions, revisions) that
//! terminates a title.

use logos::Logos;

/// Token types emitted by the Logos lexer.
///
/// More specific patterns receive higher priorities so they win when several
/// regexes match the same span. Keyword patterns are case-insensitive.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Season+episode tag, e.g. `S01E01`, `S01E01E02` (multi-episode).
    #[regex(r"(?i)S\d{1,2}E\d{1,3}(E\d{1,3})*", priority = 12)]
    SeasonEpisode(&'src str),

    /// Cross-style season/episode tag, e.g. `1x05`, `12x103`.
    #[regex(r"\d{1,2}[xX]\d{2,3}", priority = 12)]
    CrossEpisode(&'src str),

    /// Four-digit year 1900--2099.
    #[regex(r"(19|20)\d{2}", priority = 5)]
    Year(&'src str),

    /// Video resolution: 2160p, 1080p, 720p, 480p.
    #[regex(r"(?i)(2160|1080|720|480)[pi]", priority = 10)]
    Resolution(&'src str),

    /// Any scene keyword that can never be part of a title.
    // sources
    #[regex(r"(?i)(Blu-?Ray|BRRip|BDRip)", priority = 8)]
    #[regex(r"(?i)(WEB-?DL|WEBDL)", priority = 8)]
    #[regex(r"(?i)WEB-?Rip", priority = 8)]
    #[regex(r"(?i)WEB", priority = 5)]
    #[regex(r"(?i)HDTV", priority = 8)]
    #[regex(r"(?i)DVDRip", priority = 8)]
    #[regex(r"(?i)Remux", priority = 8)]
    // video codecs
    #[regex(r"(?i)x26[45]", priority = 9)]
    #[regex(r"(?i)(H\.?264|AVC)", priority = 8)]
    #[regex(r"(?i)(H\.?265|HEVC)", priority = 8)]
    #[regex(r"(?i)(AV1|VP9|XviD|DivX)", priority = 8)]
    #[regex(r"(?i)MPEG-?2", priority = 8)]
    // audio
    #[regex(r"(?i)DTS-?HD(\.?MA)?", priority = 10)]
    #[regex(r"(?i)(TrueHD|Atmos)", priority = 9)]
    #[regex(r"(?i)(E-?AC-?3|EAC3|DD\+|DDP)", priority = 9)]
    #[regex(r"(?i)(AC-?3|AC3)", priority = 7)]
    #[regex(r"(?i)DD5\.1", priority = 10)]
    #[regex(r"(?i)DTS", priority = 6)]
    #[regex(r"(?i)(AAC|FLAC|OPUS)", priority = 8)]
    // hdr
    #[regex(r"(?i)HDR10\+", priority = 11)]
    #[regex(r"(?i)HDR10", priority = 10)]
    #[regex(r"(?i)HDR", priority = 7)]
    #[regex(r"(?i)(Dolby\.?Vision|DoVi|DV)", priority = 9)]
    #[regex(r"(?i)HLG", priority = 8)]
    // editions
    #[regex(r"(?i)Directors?[.\s'-]*Cut", priority = 8)]
    #[regex(r"(?i)Special[.\s'-]*Edition", priority = 8)]
    #[regex(r"(?i)(Extended|Unrated|Remastered|IMAX|Theatrical)", priority = 7)]
    // revisions
    #[regex(r"(?i)(PROPER|REPACK)", priority = 7)]
    #[regex(r"(?i)v[2-9]", priority = 7)]
    Keyword(&'src str),

    /// Dot separator.
    #[token(".")]
    Dot,

    /// Hyphen separator.
    #[token("-")]
    Hyphen,

    /// Underscore separator.
    #[token("_")]
    Underscore,

    /// Generic word token (lowest priority -- anything not matched above).
    #[regex(r"[a-zA-Z][a-zA-Z0-9']*", priority = 1)]
    Word(&'src str),

    /// Numeric token.
    #[regex(r"\d+", priority = 2)]
    Number(&'src str),
}

/// A token together with the byte span it occupies in the original input.
#[derive(Debug, Clone)]
pub struct SpannedToken<'src> {
    pub token: Token<'src>,
    pub span: std::ops::Range<usize>,
}

/// Tokenize an input string into a `Vec` of spanned tokens.
///
/// Characters the lexer does not recognise (brackets, commas, ...) are
/// dropped.
pub fn tokenize(input: &str) -> Vec<SpannedToken<'_>> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| SpannedToken { token, span }))
        .collect()
}
