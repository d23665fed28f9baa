use std::fs;
use std::path::Path;

use crate::menu::Day;
use crate::Result;

/// Writes the day's menu as pretty-printed JSON (two-space indent, umlauts
/// kept literal). Parent directories are created on demand; the previous
/// snapshot is overwritten.
pub fn write_menu(day: &Day, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(day)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Dish, PriceSet};
    use chrono::NaiveDate;

    fn sample_day() -> Day {
        Day::new(
            NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
            vec![Dish::new(
                "Gemüsecurry".to_string(),
                PriceSet::uniform(2.8),
                vec!["V".to_string()],
                "Vegan".to_string(),
            )],
        )
    }

    #[test]
    fn test_write_menu_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("mensa_garching.json");
        write_menu(&sample_day(), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_output_is_pretty_and_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        write_menu(&sample_day(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"date\": \"2025-09-02\""));
        assert!(text.contains("Gemüsecurry"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        write_menu(&sample_day(), &path).unwrap();
        let empty = Day::empty(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
        write_menu(&empty, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("2025-09-03"));
        assert!(!text.contains("Gemüsecurry"));
    }
}
