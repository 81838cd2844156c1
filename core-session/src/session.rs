//! Audio session options and the identifiers hosts commonly pass through them.

use serde::{Deserialize, Serialize};

/// Requested audio session configuration.
///
/// Every field is optional; [`SessionOptions::resolve`] fills in the
/// defaults applied before the request reaches the audio subsystem. Values
/// are forwarded verbatim and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.ios_category = Some(category.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.ios_mode = Some(mode.into());
        self
    }

    /// Append one option, creating the list if needed.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.ios_options
            .get_or_insert_with(Vec::new)
            .push(option.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ios_options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Apply defaults: empty category and mode, no options, active session.
    pub fn resolve(&self) -> ResolvedSessionOptions {
        ResolvedSessionOptions {
            category: self.ios_category.clone().unwrap_or_default(),
            mode: self.ios_mode.clone().unwrap_or_default(),
            options: self.ios_options.clone().unwrap_or_default(),
            active: self.active.unwrap_or(true),
        }
    }
}

/// Session options with every default applied, in forwarding order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSessionOptions {
    pub category: String,
    pub mode: String,
    pub options: Vec<String>,
    pub active: bool,
}

macro_rules! session_identifiers {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

session_identifiers! {
    /// Session categories understood by the iOS audio session.
    AudioSessionCategory {
        Record => "record",
        Ambient => "ambient",
        Playback => "playback",
        MultiRoute => "multiRoute",
        SoloAmbient => "soloAmbient",
        PlayAndRecord => "playAndRecord",
    }
}

session_identifiers! {
    /// Session modes understood by the iOS audio session.
    AudioSessionMode {
        Default => "default",
        GameChat => "gameChat",
        VideoChat => "videoChat",
        VoiceChat => "voiceChat",
        Measurement => "measurement",
        VoicePrompt => "voicePrompt",
        SpokenAudio => "spokenAudio",
        MoviePlayback => "moviePlayback",
        VideoRecording => "videoRecording",
    }
}

session_identifiers! {
    /// Category options understood by the iOS audio session.
    AudioSessionOption {
        DuckOthers => "duckOthers",
        AllowAirPlay => "allowAirPlay",
        MixWithOthers => "mixWithOthers",
        AllowBluetooth => "allowBluetooth",
        DefaultToSpeaker => "defaultToSpeaker",
        AllowBluetoothA2DP => "allowBluetoothA2DP",
        OverrideMutedMicrophoneInterruption => "overrideMutedMicrophoneInterruption",
        InterruptSpokenAudioAndMixWithOthers => "interruptSpokenAudioAndMixWithOthers",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = SessionOptions::default().resolve();
        assert_eq!(
            resolved,
            ResolvedSessionOptions {
                category: String::new(),
                mode: String::new(),
                options: Vec::new(),
                active: true,
            }
        );
    }

    #[test]
    fn test_resolve_partial() {
        let resolved = SessionOptions::new()
            .with_category(AudioSessionCategory::Playback)
            .with_active(false)
            .resolve();

        assert_eq!(resolved.category, "playback");
        assert_eq!(resolved.mode, "");
        assert!(resolved.options.is_empty());
        assert!(!resolved.active);
    }

    #[test]
    fn test_options_accumulate() {
        let options = SessionOptions::new()
            .with_option(AudioSessionOption::DuckOthers)
            .with_option("somethingCustom");

        assert_eq!(
            options.ios_options,
            Some(vec!["duckOthers".to_string(), "somethingCustom".to_string()])
        );

        let replaced = options.with_options([AudioSessionOption::AllowAirPlay]);
        assert_eq!(replaced.ios_options, Some(vec!["allowAirPlay".to_string()]));
    }

    #[test]
    fn test_unknown_identifiers_pass_through() {
        let resolved = SessionOptions::new()
            .with_category("notACategory")
            .with_mode("")
            .resolve();
        assert_eq!(resolved.category, "notACategory");
    }

    #[test]
    fn test_serde_wire_shape() {
        let options = SessionOptions::new()
            .with_category(AudioSessionCategory::PlayAndRecord)
            .with_mode(AudioSessionMode::SpokenAudio);

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "iosCategory": "playAndRecord", "iosMode": "spokenAudio" })
        );

        let parsed: SessionOptions =
            serde_json::from_str(r#"{"iosOptions":["mixWithOthers"],"active":false}"#).unwrap();
        assert_eq!(parsed.ios_category, None);
        assert_eq!(parsed.ios_options, Some(vec!["mixWithOthers".to_string()]));
        assert_eq!(parsed.active, Some(false));
    }

    #[test]
    fn test_identifier_strings() {
        assert_eq!(AudioSessionMode::Default.as_str(), "default");
        assert_eq!(AudioSessionOption::AllowBluetoothA2DP.to_string(), "allowBluetoothA2DP");
        assert_eq!(
            serde_json::to_string(&AudioSessionCategory::SoloAmbient).unwrap(),
            "\"soloAmbient\""
        );
    }
}
