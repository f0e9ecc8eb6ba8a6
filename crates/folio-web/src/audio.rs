//! `<audio>`-backed sound effects

use std::collections::HashMap;

use folio_desktop::{AudioSink, FolioConfig, FolioError, FolioResult, SoundEffect};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::log;

/// Plays each effect from one cached `<audio>` element, restarting it on
/// every trigger
pub(crate) struct HtmlAudioSink {
    asset_root: String,
    volume: f64,
    clips: HashMap<SoundEffect, HtmlAudioElement>,
}

impl HtmlAudioSink {
    pub(crate) fn new(config: &FolioConfig) -> Self {
        Self {
            asset_root: config.asset_path(""),
            volume: config.sound_volume as f64,
            clips: HashMap::new(),
        }
    }

    fn clip(&mut self, effect: SoundEffect) -> FolioResult<&HtmlAudioElement> {
        if !self.clips.contains_key(&effect) {
            let src = format!("{}{}", self.asset_root, effect.file_name());
            let audio = HtmlAudioElement::new_with_src(&src)
                .map_err(|_| FolioError::AssetUnavailable(src.clone()))?;
            audio.set_volume(self.volume);
            self.clips.insert(effect, audio);
        }
        self.clips
            .get(&effect)
            .ok_or_else(|| FolioError::AssetUnavailable(effect.file_name().to_string()))
    }
}

impl AudioSink for HtmlAudioSink {
    fn play(&mut self, effect: SoundEffect) -> FolioResult<()> {
        let audio = self.clip(effect)?;
        audio.set_current_time(0.0);
        let promise = audio
            .play()
            .map_err(|_| FolioError::PlaybackBlocked(effect))?;

        // Autoplay rejections arrive later; they are only logged
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log(&format!("[audio] {} blocked: {:?}", effect.id(), err));
            }
        });
        Ok(())
    }
}
