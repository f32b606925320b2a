// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the carlot CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `CARLOT_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! dropped entirely when stdout is not a TTY or `NO_COLOR` is set, so piping
//! a quote into a file gives plain text.

use std::sync::OnceLock;

use rust_decimal::Decimal;

use carlot::RateTier;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 56;

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
    if let Ok(theme) = std::env::var("CARLOT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
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

/// Visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    if use_colors() {
        println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
    } else {
        println!("│{}{}│", content, " ".repeat(pad));
    }
}

/// │ label ........................ value │
pub fn row_kv(label: &str, value: &str) {
    let inner = BOX_WIDTH - 2;
    let label = pad_right(label, inner.saturating_sub(visible_len(value)));
    row(&format!(" {}{} ", label, value));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    if use_colors() {
        let border = GRAY();
        println!(
            "{}┌{}{}{}{}┐{}",
            border,
            RESET,
            label_part,
            border,
            "─".repeat(remaining),
            RESET
        );
    } else {
        println!("┌{}{}┐", label_part, "─".repeat(remaining));
    }
}

/// ├──────────────────┤
pub fn divider() {
    if use_colors() {
        println!("{}├{}┤{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
    } else {
        println!("├{}┤", "─".repeat(BOX_WIDTH));
    }
}

/// └──────────────────┘
pub fn section_bot() {
    if use_colors() {
        println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
    } else {
        println!("└{}┘", "─".repeat(BOX_WIDTH));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Money to 2 dp with thousands separators: `107750` → `107,750.00`
pub fn format_money(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Color-coded rate tier badge
pub fn tier_label(tier: RateTier) -> String {
    let text = format!("[{}]", tier);
    match tier {
        RateTier::Daily => themed(GRAY, &[], &text),
        RateTier::Weekly => themed(BLUE, &[BOLD], &text),
        RateTier::Monthly => themed(MAGENTA, &[BOLD], &text),
    }
}

/// Savings percentage, green when there is any
pub fn savings_colored(percent: Decimal) -> String {
    if percent.is_zero() {
        themed(GRAY, &[], "0%")
    } else {
        themed(GREEN, &[BOLD], &format!("{:.1}%", percent.round_dp(1)))
    }
}

/// Color-coded suggestion score
pub fn score_value(score: f64) -> String {
    let text = format!("{:>5.1}", score);
    if score >= 90.0 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 70.0 {
        themed(GREEN, &[], &text)
    } else if score >= 50.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Red error prefix for stderr
pub fn error_prefix() -> String {
    if std::env::var("NO_COLOR").is_ok() || !atty::is(atty::Stream::Stderr) {
        "error:".to_string()
    } else {
        format!("{}{}error:{}", BOLD, RED(), RESET)
    }
}
