use crate::core::config::data::Config;

impl Config {
    pub fn summary_lines(&self) -> Vec<String> {
        let base_url = match &self.base_url {
            Some(url) => format!("  base-url: {url}"),
            None => "  base-url: (unset)".to_string(),
        };
        let theme = match &self.theme {
            Some(theme) => format!("  theme: {theme}"),
            None => "  theme: (unset)".to_string(),
        };
        vec!["Current configuration:".to_string(), base_url, theme]
    }

    pub fn print_all(&self) {
        for line in self.summary_lines() {
            println!("{line}");
        }
    }
}
