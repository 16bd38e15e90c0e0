//! Zero-alloc ANSI colour tokens used to tint chart series.

use std::{fmt, str};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

// --- AnsiCode ---
/// An SGR escape sequence. The empty token means "no colour".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    /// Leaves glyphs untouched.
    pub const fn none() -> Self {
        Self::Static("")
    }
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn light_gray() -> Self {
        Self::Static("\x1b[37m")
    }
    /// Terminal's own foreground colour.
    pub const fn default_fg() -> Self {
        Self::Static("\x1b[39m")
    }
    pub const fn dark_gray() -> Self {
        Self::Static("\x1b[90m")
    }
    pub const fn light_red() -> Self {
        Self::Static("\x1b[91m")
    }
    pub const fn light_green() -> Self {
        Self::Static("\x1b[92m")
    }
    pub const fn light_yellow() -> Self {
        Self::Static("\x1b[93m")
    }
    pub const fn light_blue() -> Self {
        Self::Static("\x1b[94m")
    }
    pub const fn light_magenta() -> Self {
        Self::Static("\x1b[95m")
    }
    pub const fn light_cyan() -> Self {
        Self::Static("\x1b[96m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[97m")
    }
    pub const fn industrial_orange() -> Self {
        Self::Static("\x1b[38;2;210;135;10m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(Self::none()),
            "default" => Ok(Self::default_fg()),
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "lightgray" | "light-gray" => Ok(Self::light_gray()),
            "darkgray" | "dark-gray" => Ok(Self::dark_gray()),
            "lightred" | "light-red" => Ok(Self::light_red()),
            "lightgreen" | "light-green" => Ok(Self::light_green()),
            "lightyellow" | "light-yellow" => Ok(Self::light_yellow()),
            "lightblue" | "light-blue" => Ok(Self::light_blue()),
            "lightmagenta" | "light-magenta" => Ok(Self::light_magenta()),
            "lightcyan" | "light-cyan" => Ok(Self::light_cyan()),
            "white" => Ok(Self::white()),
            "orange" | "industrial" => Ok(Self::industrial_orange()),
            _ => Self::from_hex(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // Only ever filled with ASCII by `rgb`.
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Default for AnsiCode {
    fn default() -> Self {
        Self::none()
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence. The empty colour is a no-op.
#[inline]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    if c.is_none() {
        return text.to_owned();
    }
    format!("{c}{text}{}", AnsiCode::reset())
}

/// Same as [`colorize`] but appends into an existing buffer.
#[inline]
pub fn push_colorized(buf: &mut String, c: &AnsiCode, glyph: char) {
    if c.is_none() {
        buf.push(glyph);
        return;
    }
    buf.push_str(c.as_str());
    buf.push(glyph);
    buf.push_str(AnsiCode::reset().as_str());
}
