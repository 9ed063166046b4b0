use crate::fetcher::{FetchError, ProfileFetcher};
use crate::profile::Profile;
use colored::Colorize;
use log::{error, info};
use std::fmt;
use tokio::sync::watch;
use url::Url;

pub const NO_USERNAME: &str = "no username";
pub const NO_BIO: &str = "no bio yet.";

/// Display binding for a single [`Profile`].
///
/// The current record lives in a `watch` channel: `load` is the only writer,
/// subscribers see every publication, and each one replaces the last.
pub struct ProfileScreen {
    user: watch::Sender<Option<Profile>>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        let (user, _) = watch::channel(None);
        Self { user }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Profile>> {
        self.user.subscribe()
    }

    pub fn current(&self) -> Option<Profile> {
        self.user.borrow().clone()
    }

    /// Runs one fetch. Success publishes; failure is logged and leaves the
    /// published value as it was.
    pub async fn load(&self, fetcher: &ProfileFetcher) -> Result<(), FetchError> {
        match fetcher.fetch().await {
            Ok(profile) => {
                info!("Loaded profile for {}", profile.handle);
                self.user.send_replace(Some(profile));
                Ok(())
            }
            Err(err) => {
                error!("{err}");
                Err(err)
            }
        }
    }

    pub fn render(&self) -> ProfileCard {
        ProfileCard::from_profile(self.user.borrow().as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(Url),
    Placeholder,
}

/// What the screen shows: an avatar (or placeholder) and two text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub avatar: Avatar,
    pub handle: String,
    pub bio: String,
}

impl ProfileCard {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let avatar = profile
            .and_then(|p| Url::parse(&p.avatar_url).ok())
            .map_or(Avatar::Placeholder, Avatar::Image);

        Self {
            avatar,
            handle: profile.map_or(NO_USERNAME, |p| p.handle.as_str()).to_string(),
            bio: profile.map_or(NO_BIO, |p| p.bio.as_str()).to_string(),
        }
    }
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.avatar {
            Avatar::Image(url) => writeln!(f, "( {} )", url.as_str().cyan())?,
            Avatar::Placeholder => writeln!(f, "( {} )", "o".dimmed())?,
        }
        writeln!(f, "{}", self.handle.bold())?;
        write!(f, "{}", self.bio.italic())
    }
}
