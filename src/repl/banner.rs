use console::{style, Key, Term};
use tui_banner::{Align, Banner, ColorMode, Fill, Gradient, GradientDirection, Palette};

/// Color palette: azure gradient matching the tool's domain.
const BRAND: u8 = 75;      // azure blue, primary brand
const BRAND_DIM: u8 = 67;  // dim slate blue
const DIM: u8 = 240;       // dim text

/// The separator character (horizontal ellipsis).
const SEP_CHAR: char = '\u{2026}'; // …

const TAGLINE: &str = "Azure Subscription Security Inspector";

/// Show the full-screen splash banner.
/// Waits for Enter, then clears and returns.
pub fn show_splash() {
    let term = Term::stdout();
    let _ = term.clear_screen();

    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");

    let (_, term_cols) = term.size();
    let term_w = term_cols as usize;

    let center = |text_w: usize| -> String {
        if term_w > text_w + 4 {
            " ".repeat((term_w - text_w) / 2)
        } else {
            "  ".to_string()
        }
    };

    // ── Render the FIGlet banner via tui-banner ──
    let palette = Palette::from_hex(&[
        "#B5E3FF", // light sky (glow)
        "#5FAFFF", // azure (brand core)
        "#2F6FD7", // mid blue
        "#5F5FAF", // muted indigo (deep)
    ]);
    let gradient = Gradient::new(palette.colors().to_vec(), GradientDirection::Diagonal);

    let banner_text = match Banner::new("AZSCOPE") {
        Ok(b) => b
            .gradient(gradient)
            .fill(Fill::Keep)
            .align(Align::Center)
            .trim_vertical(true)
            .edge_shade(0.35, '\u{2591}') // ░
            .color_mode(ColorMode::TrueColor)
            .width(term_w)
            .render(),
        Err(_) => {
            // Fallback if FIGlet font fails
            let p = center(7);
            format!("{}{}\n", p, style("AZSCOPE").color256(BRAND).bold())
        }
    };

    // ── Banner ──
    println!();
    print!("{}", banner_text);

    // ── Version ──
    {
        let version_str = format!("v{} ({})", version, git_hash);
        let p = center(version_str.len());
        println!("{}{}", p, style(version_str).color256(DIM));
    }

    // ── Top separator ──
    let scene_w = term_w.min(76).max(40);
    let pad = center(scene_w);
    println!(
        "{}{}",
        pad,
        style(SEP_CHAR.to_string().repeat(scene_w)).color256(BRAND_DIM),
    );

    // ── Tagline ──
    {
        let p = center(TAGLINE.len());
        println!("{}{}", p, style(TAGLINE).white().bold());
    }

    // ── Bottom separator ──
    println!(
        "{}{}",
        pad,
        style(SEP_CHAR.to_string().repeat(scene_w)).color256(BRAND_DIM),
    );
    println!();

    // ── Scope notice ──
    print_notice_box(&center);
    println!();

    // ── Ready line ──
    {
        let msg = "Configuration loaded \u{2014} ready to inspect";
        let p = center(msg.len() + 4);
        println!(
            "{}  {} {}",
            p,
            style("\u{2714}").green().bold(),
            style(msg).green(),
        );
    }
    println!();

    // ── Quick start ──
    let guide: &[(&str, &str)] = &[
        ("/list",                    "Show available subscriptions"),
        ("/analyze <number|id|name>", "Run the security checks"),
        ("/roles",                   "Show the privileged role set"),
        ("/help",                    "List all commands"),
    ];
    {
        let p = center(56);
        println!("{}  {}", p, style("Quick Start:").white().bold());
        println!();
        for (cmd, desc) in guide {
            println!(
                "{}    {:<42} {}",
                p,
                style(cmd).color256(BRAND),
                style(desc).dim(),
            );
        }
    }
    println!();

    // ── Press Enter ──
    {
        let p = center(24);
        println!(
            "{}  Press {} to continue",
            p,
            style("Enter").white().bold(),
        );
    }

    loop {
        match term.read_key() {
            Ok(Key::Enter) => break,
            Ok(Key::Escape) => break,
            Err(_) => break,
            _ => {}
        }
    }

    // Clear and show brief post-splash header
    let _ = term.clear_screen();
    println!(
        "  {} {}  {}",
        style("Azscope").color256(BRAND).bold(),
        style(format!("v{}", version)).dim(),
        style("\u{2714} ready").green().dim(),
    );
    println!(
        "  {} {}",
        style("Type").dim(),
        style("/help").white().bold(),
    );
    println!();
}

/// Print the read-only scope notice inside a box-drawn border.
fn print_notice_box(center: &dyn Fn(usize) -> String) {
    let notice_lines: &[&str] = &[
        "This tool reads Defender plans, assessments, and role assignments.",
        "It makes no changes to your Azure environment.",
        "Credentials are used only to request Azure AD tokens.",
    ];

    let content_w = notice_lines.iter().map(|l| l.len()).max().unwrap_or(40);
    let inner_w = content_w + 4; // 2-char left + 2-char right margin
    let pad = center(inner_w + 2);

    let hbar = "\u{2500}".repeat(inner_w);

    // Top border
    println!(
        "{}{}{}{}",
        pad,
        style("\u{250c}").color256(BRAND_DIM),
        style(&hbar).color256(BRAND_DIM),
        style("\u{2510}").color256(BRAND_DIM),
    );

    // Header, centered
    {
        let header = "READ-ONLY INSPECTION";
        let icon = "\u{1f6e1}";
        let text_w = 1 + 2 + header.len();
        let left = (inner_w.saturating_sub(text_w)) / 2;
        let right = inner_w.saturating_sub(text_w + left);
        println!(
            "{}{}{}{}  {}{}{}",
            pad,
            style("\u{2502}").color256(BRAND_DIM),
            " ".repeat(left),
            style(icon).color256(BRAND).bold(),
            style(header).color256(BRAND).bold(),
            " ".repeat(right),
            style("\u{2502}").color256(BRAND_DIM),
        );
    }

    // Separator
    {
        let sep = "\u{2500}".repeat(inner_w - 2);
        println!(
            "{}{} {} {}",
            pad,
            style("\u{2502}").color256(BRAND_DIM),
            style(sep).color256(BRAND_DIM),
            style("\u{2502}").color256(BRAND_DIM),
        );
    }

    // Notice lines
    for line in notice_lines {
        let right_pad = inner_w.saturating_sub(line.len() + 2);
        println!(
            "{}{}  {}{}{}",
            pad,
            style("\u{2502}").color256(BRAND_DIM),
            style(line).dim(),
            " ".repeat(right_pad),
            style("\u{2502}").color256(BRAND_DIM),
        );
    }

    // Bottom border
    println!(
        "{}{}{}{}",
        pad,
        style("\u{2514}").color256(BRAND_DIM),
        style(&hbar).color256(BRAND_DIM),
        style("\u{2518}").color256(BRAND_DIM),
    );
}
