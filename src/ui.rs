use console::Style;
use passgen::{GenerationRequest, Strength};
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 64.0;
pub const MIN_SAFE_LENGTH: usize = 12;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub struct Report {
    pub score: u8,
    pub strength: Strength,
    pub source: &'static str,
    pub copied: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    if !options.color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

pub fn strength_style(strength: Strength, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }

    match strength {
        Strength::Weak => Style::new().red(),
        Strength::Medium => Style::new().yellow(),
        Strength::Strong => Style::new().blue(),
        Strength::VeryStrong => Style::new().green(),
    }
}

pub fn display_output(
    password: &Zeroizing<String>,
    request: &GenerationRequest,
    report: &Report,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", &**password);
        return;
    }

    println!("Out[0]:\n{}\n", &**password);

    display_settings(request, report, options);
    display_stats(request, report, options);

    if report.copied {
        println!("\nPassword copied to clipboard!");
    }
}

fn display_settings(request: &GenerationRequest, report: &Report, options: &DisplayOptions) {
    let (branch, last) = tree_branches(options.unicode_support);

    println!("Settings:");
    println!("  {} Classes    {} ({})", branch, request.classes.len(), request.classes);
    println!(
        "  {} Charset    {} {}",
        branch,
        request.charset_size(),
        plural(request.charset_size(), "char", "chars")
    );
    println!("  {} Source     {}", branch, report.source);
    println!(
        "  {} Output     {} {}",
        last,
        request.length,
        plural(request.length, "char", "chars")
    );

    println!();
}

fn display_stats(request: &GenerationRequest, report: &Report, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let entropy = request.entropy_bits();
    let entropy_secure = entropy >= MIN_SAFE_ENTROPY;
    let length_secure = request.length >= MIN_SAFE_LENGTH;

    let entropy_style = status_style(entropy_secure, options);
    let length_style = status_style(length_secure, options);
    let label_style = strength_style(report.strength, options.color_support);

    println!("Stats:");

    println!(
        "  {} Entropy    {} {} bits",
        branch,
        entropy_style.apply_to(format!(
            "[{}]",
            if entropy_secure { check_ok } else { check_warn }
        )),
        entropy_style.apply_to(format!("{:.1}", entropy))
    );

    println!(
        "  {} Length     {} {} {}",
        branch,
        length_style.apply_to(format!(
            "[{}]",
            if length_secure { check_ok } else { check_warn }
        )),
        length_style.apply_to(request.length),
        plural(request.length, "char", "chars")
    );

    println!(
        "  {} Score      {}/{}",
        last,
        label_style.apply_to(report.score),
        passgen::strength::MAX_SCORE
    );

    println!("\n{}", strength_line(report.strength, &label_style));
}

fn strength_line(strength: Strength, style: &Style) -> String {
    format!("Password Strength: {}", style.apply_to(strength))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_tree_branches_ascii_fallback() {
        assert_eq!(tree_branches(false), ("|-", "`-"));
        assert_eq!(tree_branches(true), ("├─", "└─"));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "char", "chars"), "char");
        assert_eq!(plural(0, "char", "chars"), "chars");
        assert_eq!(plural(12, "char", "chars"), "chars");
    }

    #[test]
    fn test_strength_style_without_color_is_plain() {
        for strength in [
            Strength::Weak,
            Strength::Medium,
            Strength::Strong,
            Strength::VeryStrong,
        ] {
            let styled = strength_style(strength, false).apply_to(strength).to_string();
            assert_eq!(styled, strength.label());
        }
    }

    #[test]
    fn test_strength_line() {
        let plain = Style::new();
        assert_eq!(
            strength_line(Strength::VeryStrong, &plain),
            "Password Strength: Very Strong"
        );
        assert_eq!(strength_line(Strength::Weak, &plain), "Password Strength: Weak");
    }
}
