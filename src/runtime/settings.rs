use crate::config::Settings;

/// Load the configuration for this run.
///
/// Returns the settings plus a warning when part of the config was replaced
/// by defaults. Failed validation resets every section except `[playlist]`,
/// which is always kept as loaded.
pub fn load_settings() -> (Settings, Option<String>) {
    let loaded = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            return (
                Settings::default(),
                Some(format!("failed to load config, using defaults: {e}")),
            );
        }
    };

    match loaded.validate() {
        Ok(()) => (loaded, None),
        Err(msg) => (
            Settings {
                playlist: loaded.playlist,
                ..Settings::default()
            },
            Some(format!("invalid config, using defaults outside [playlist]: {msg}")),
        ),
    }
}
