use colored::Colorize;

use crate::deck::{Deck, Edition, FeatureLevel};

pub fn run(level: FeatureLevel, json: bool) -> anyhow::Result<()> {
    let deck = Deck::new(level);
    if json {
        println!("{}", serde_json::to_string_pretty(&deck.slides)?);
        return Ok(());
    }

    println!("{} {}", deck.title().bold(), format!("({level}, {} slide)", deck.len()).dimmed());
    for (i, slide) in deck.slides.iter().enumerate() {
        println!("{}", outline_line(i, slide));
        if let Some(subtitle) = slide.subtitle {
            println!("      {}", subtitle.dimmed());
        }
        for link in &slide.info {
            println!("      {} {}", "\u{24D8}".cyan(), link.label);
        }
    }
    Ok(())
}

fn outline_line(index: usize, slide: &crate::deck::Slide) -> String {
    let number = format!("{:>2}.", index + 1);
    let marker = match slide.edition {
        Edition::Core => String::new(),
        Edition::Extended => format!(" {}", "+".yellow()),
    };
    let badge = slide
        .badge
        .map(|d| format!("  {}", d.badge().dimmed()))
        .unwrap_or_default();
    format!(
        "  {} {} {}{marker}{badge}",
        number.dimmed(),
        slide.icon.unwrap_or(" "),
        slide.title.bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_line_numbers_from_one() {
        colored::control::set_override(false);
        let deck = Deck::new(FeatureLevel::Base);
        let line = outline_line(0, &deck.slides[0]);
        assert!(line.contains(" 1."));
        assert!(line.contains(deck.slides[0].title));
    }

    #[test]
    fn test_extended_slides_are_marked() {
        colored::control::set_override(false);
        let deck = Deck::new(FeatureLevel::InfoPanels);
        let (i, slide) = deck
            .slides
            .iter()
            .enumerate()
            .find(|(_, s)| s.edition == Edition::Extended)
            .unwrap();
        assert!(outline_line(i, slide).contains(" +"));
    }
}
