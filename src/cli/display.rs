// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the katsuyo CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection tries
//! `KATSUYO_THEME` first, then `COLORFGBG`, then falls back to dark. `NO_COLOR`
//! and non-TTY stdout turn color off entirely.
//!
//! Kana and kanji occupy two terminal columns, so every width calculation
//! goes through `unicode-width` rather than counting chars.

use std::sync::OnceLock;

use unicode_width::UnicodeWidthChar;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KATSUYO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never when NO_COLOR is set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Terminal columns occupied by `s`, skipping ANSI escapes.
pub fn visible_width(s: &str) -> usize {
    let mut in_escape = false;
    let mut width = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_width(content));
    println!("{b}│{reset}{}{}{b}│{reset}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_width(&label_part));
    println!("{b}┌{reset}{}{b}{}┐{reset}", label_part, "─".repeat(remaining));
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_width(&label_part));
    println!("{b}├{reset}{}{b}{}┤{reset}", label_part, "─".repeat(remaining));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{b}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

/// Print a double-line title block: ╔═╗ ║ TITLE ║ ╚═╝
pub fn title_block(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_width(&colored));
    let left = total_pad / 2;
    println!("{b}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
    println!(
        "{b}║{reset}{}{}{}{b}║{reset}",
        " ".repeat(left),
        colored,
        " ".repeat(total_pad - left)
    );
    println!("{b}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// A count that should be zero: green when it is, red otherwise.
pub fn count_expect_zero(n: usize) -> String {
    if n == 0 {
        themed(GREEN, &[], &n.to_string())
    } else {
        themed(RED, &[BOLD], &n.to_string())
    }
}

/// `have/total`, green when complete.
pub fn coverage(have: usize, total: usize) -> String {
    let text = format!("{}/{}", have, total);
    if have == total {
        themed(GREEN, &[BOLD], &text)
    } else {
        themed(YELLOW, &[BOLD], &text)
    }
}

/// ✓ / ✗ check mark.
pub fn check(ok: bool) -> String {
    if ok {
        themed(GREEN, &[BOLD], "✓")
    } else {
        themed(RED, &[BOLD], "✗")
    }
}

/// Dimmed secondary text.
pub fn muted(text: &str) -> String {
    themed(GRAY, &[DIM], text)
}

/// Color per hydration action name.
pub fn action_label(name: &str) -> String {
    let color: fn() -> String = match name {
        "added" | "added-precomputed" => GREEN,
        "updated" | "updated-precomputed" => BLUE,
        "cleared" => MAGENTA,
        "errored" => RED,
        _ => GRAY,
    };
    themed(color, &[BOLD], name)
}
