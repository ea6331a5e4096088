//! The bot's features as shown in the dashboard.

pub mod meme;
pub mod music;
pub mod welcome_message;

use crate::client::dashboard::Features;

pub fn features() -> Features {
    Features {
        welcome_message: welcome_message::config(),
        meme: meme::config(),
        music: music::config(),
    }
}

#[cfg(test)]
mod test;
