use colored::Colorize;

use crate::deck::layers::LAYERS;
use crate::deck::FeatureLevel;
use crate::theme::Theme;

/// One bar per layer, tinted like the slides.
pub fn print_banner() {
    let theme = Theme::for_level(FeatureLevel::Base);
    for profile in &LAYERS {
        let c = theme.layer_color(profile.number);
        let bar = "\u{2588}".repeat(usize::from(profile.number) * 3);
        println!(
            "  {:<21} {}",
            bar.truecolor(c.r(), c.g(), c.b()),
            format!("L{} {}", profile.number, profile.name).dimmed()
        );
    }
}

pub fn print_banner_with_version() {
    print_banner();
    println!();
    println!(
        "  {} {}",
        "osijourney".bold().cyan(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!("  {}", "Il Viaggio del Messaggio".italic());
}
