//! Settings command module
//!
//! Handles converter settings persistence.

use crate::core::session::ConverterSession;
use crate::shared::error::AppResult;
use crate::shared::settings::ConverterSettings;

/// Get current converter settings
pub fn get_settings_command() -> AppResult<ConverterSettings> {
    ConverterSettings::load()
}

/// Save converter settings and apply them to the session
pub fn save_settings_command(session: &mut ConverterSession, settings: ConverterSettings) -> AppResult<()> {
    settings.save()?;
    session.set_settings(settings);
    Ok(())
}
