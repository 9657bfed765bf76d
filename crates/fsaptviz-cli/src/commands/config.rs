use crate::cli::{ConfigArgs, ConfigCommands, SettingsArgs};
use crate::config::{AppConfig, build_config, default_config_path};
use crate::error::Result;

pub fn run(args: ConfigArgs, settings: &SettingsArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            let path = default_config_path()?;
            let state = if path.exists() { "" } else { " (not created)" };
            println!("{}{}", path.display(), state);
        }
        ConfigCommands::Show => {
            let config = build_config(settings)?;
            println!("{}", render(&config));
        }
    }
    Ok(())
}

/// Renders the merged configuration in the same layout the config file uses.
fn render(config: &AppConfig) -> String {
    let classifier = &config.classifier;
    let palette = &classifier.palette;
    let list = |colors: &[fsaptviz::core::models::color::Color]| {
        colors
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "[api]\n\
         url = \"{}\"\n\
         timeout-secs = {}\n\
         \n\
         [analysis]\n\
         threshold = {:?}\n\
         \n\
         [classifier]\n\
         neutral-cutoff = {:?}\n\
         moderate-intensity = {:?}\n\
         strong-intensity = {:?}\n\
         default-color = \"{}\"\n\
         \n\
         [classifier.palette]\n\
         neutral = \"{}\"\n\
         attractive = [{}]\n\
         repulsive = [{}]",
        config.api.base_url,
        config.api.timeout.as_secs(),
        config.threshold,
        classifier.neutral_cutoff,
        classifier.moderate_intensity,
        classifier.strong_intensity,
        classifier.default_color,
        palette.neutral,
        list(&palette.attractive),
        list(&palette.repulsive),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn rendered_config_parses_back_as_a_config_file() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.toml");
        fs::write(&empty, "").unwrap();
        let settings = SettingsArgs {
            config: Some(empty),
            set_values: vec!["analysis.threshold=0.25".to_string()],
            ..SettingsArgs::default()
        };
        let config = build_config(&settings).unwrap();
        let text = render(&config);
        assert!(text.contains("threshold = 0.25"));
        assert!(text.contains("url = \"http://localhost:5000\""));

        let rendered = dir.path().join("rendered.toml");
        fs::write(&rendered, &text).unwrap();
        FileConfig::from_file(&rendered).unwrap();

        let reloaded = build_config(&SettingsArgs {
            config: Some(rendered),
            ..SettingsArgs::default()
        })
        .unwrap();
        assert_eq!(reloaded, config);
    }
}
