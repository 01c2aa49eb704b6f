//! Slider configuration and the resolver that merges caller options over defaults.
//!
//! [`SliderOptions`] is the override set: every field is optional. It can be
//! built in code or parsed from a loosely-typed JSON object, which is what
//! markup-driven glue hands over. [`SliderConfig::merge`] folds an override set
//! over the documented defaults; the result replaces the previous configuration
//! wholesale.

use glissando_foundation::{Direction, Easing};
use serde_json::{Map, Value};
use std::fmt;

/// Default transition duration in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 400;

pub type ChangeHook<S> = Box<dyn FnMut(usize, Option<&S>, Direction)>;
pub type SlideHook<S> = Box<dyn FnMut(usize, Option<&S>)>;
pub type MoveHook = Box<dyn FnMut()>;

/// Lifecycle notifications. `S` is the host's slide handle.
pub struct SliderCallbacks<S> {
    pub on_change: Option<ChangeHook<S>>,
    pub on_transition_end: Option<SlideHook<S>>,
    pub on_drag_start: Option<SlideHook<S>>,
    pub on_drag_end: Option<SlideHook<S>>,
    pub on_move: Option<MoveHook>,
}

impl<S> Default for SliderCallbacks<S> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_transition_end: None,
            on_drag_start: None,
            on_drag_end: None,
            on_move: None,
        }
    }
}

impl<S> fmt::Debug for SliderCallbacks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_transition_end", &self.on_transition_end.is_some())
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .field("on_move", &self.on_move.is_some())
            .finish()
    }
}

/// Effective configuration of a slider instance.
#[derive(Debug)]
pub struct SliderConfig<S> {
    /// Transition duration in milliseconds.
    pub speed: u64,
    /// Index shown after the first layout.
    pub start_slide: usize,
    /// Enables mouse drags when unified pointer input is unavailable.
    pub draggable: bool,
    pub mousewheel: bool,
    /// Suppress page scrolling even when a session locks vertically.
    pub disable_scroll: bool,
    pub stop_propagation: bool,
    /// Interactions starting on targets matching this selector are not intercepted.
    pub ignore_selector: Option<String>,
    /// Opt into passive listeners where supported; forfeits default suppression.
    pub passive: bool,
    pub easing: Easing,
    pub callbacks: SliderCallbacks<S>,
    /// Keys the resolver does not recognise, kept for callback use.
    pub extra: Map<String, Value>,
}

impl<S> Default for SliderConfig<S> {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_MS,
            start_slide: 0,
            draggable: false,
            mousewheel: true,
            disable_scroll: false,
            stop_propagation: false,
            ignore_selector: None,
            passive: false,
            easing: Easing::default(),
            callbacks: SliderCallbacks::default(),
            extra: Map::new(),
        }
    }
}

impl<S> SliderConfig<S> {
    /// Per-key override of `defaults`. Callback hooks move over from `overrides`.
    pub fn merge(defaults: SliderConfig<S>, overrides: SliderOptions<S>) -> SliderConfig<S> {
        let SliderOptions {
            speed,
            start_slide,
            draggable,
            mousewheel,
            disable_scroll,
            stop_propagation,
            ignore_selector,
            passive,
            easing,
            callbacks,
            extra,
        } = overrides;

        let mut merged_extra = defaults.extra;
        merged_extra.extend(extra);

        SliderConfig {
            speed: speed.unwrap_or(defaults.speed),
            start_slide: start_slide.unwrap_or(defaults.start_slide),
            draggable: draggable.unwrap_or(defaults.draggable),
            mousewheel: mousewheel.unwrap_or(defaults.mousewheel),
            disable_scroll: disable_scroll.unwrap_or(defaults.disable_scroll),
            stop_propagation: stop_propagation.unwrap_or(defaults.stop_propagation),
            ignore_selector: ignore_selector.or(defaults.ignore_selector),
            passive: passive.unwrap_or(defaults.passive),
            easing: easing.unwrap_or(defaults.easing),
            callbacks: SliderCallbacks {
                on_change: callbacks.on_change.or(defaults.callbacks.on_change),
                on_transition_end: callbacks
                    .on_transition_end
                    .or(defaults.callbacks.on_transition_end),
                on_drag_start: callbacks.on_drag_start.or(defaults.callbacks.on_drag_start),
                on_drag_end: callbacks.on_drag_end.or(defaults.callbacks.on_drag_end),
                on_move: callbacks.on_move.or(defaults.callbacks.on_move),
            },
            extra: merged_extra,
        }
    }

    /// Resolves `overrides` over the documented defaults.
    pub fn resolve(overrides: SliderOptions<S>) -> SliderConfig<S> {
        Self::merge(SliderConfig::default(), overrides)
    }
}

/// Caller-supplied overrides. Unset fields fall back to the defaults.
#[derive(Debug)]
pub struct SliderOptions<S> {
    pub speed: Option<u64>,
    pub start_slide: Option<usize>,
    pub draggable: Option<bool>,
    pub mousewheel: Option<bool>,
    pub disable_scroll: Option<bool>,
    pub stop_propagation: Option<bool>,
    pub ignore_selector: Option<String>,
    pub passive: Option<bool>,
    pub easing: Option<Easing>,
    pub callbacks: SliderCallbacks<S>,
    pub extra: Map<String, Value>,
}

impl<S> Default for SliderOptions<S> {
    fn default() -> Self {
        Self {
            speed: None,
            start_slide: None,
            draggable: None,
            mousewheel: None,
            disable_scroll: None,
            stop_propagation: None,
            ignore_selector: None,
            passive: None,
            easing: None,
            callbacks: SliderCallbacks::default(),
            extra: Map::new(),
        }
    }
}

impl<S> SliderOptions<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(mut self, speed: u64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn start_slide(mut self, index: usize) -> Self {
        self.start_slide = Some(index);
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    pub fn mousewheel(mut self, mousewheel: bool) -> Self {
        self.mousewheel = Some(mousewheel);
        self
    }

    pub fn disable_scroll(mut self, disable_scroll: bool) -> Self {
        self.disable_scroll = Some(disable_scroll);
        self
    }

    pub fn stop_propagation(mut self, stop_propagation: bool) -> Self {
        self.stop_propagation = Some(stop_propagation);
        self
    }

    pub fn ignore_selector(mut self, selector: impl Into<String>) -> Self {
        self.ignore_selector = Some(selector.into());
        self
    }

    pub fn passive(mut self, passive: bool) -> Self {
        self.passive = Some(passive);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn on_change(mut self, hook: impl FnMut(usize, Option<&S>, Direction) + 'static) -> Self {
        self.callbacks.on_change = Some(Box::new(hook));
        self
    }

    pub fn on_transition_end(mut self, hook: impl FnMut(usize, Option<&S>) + 'static) -> Self {
        self.callbacks.on_transition_end = Some(Box::new(hook));
        self
    }

    pub fn on_drag_start(mut self, hook: impl FnMut(usize, Option<&S>) + 'static) -> Self {
        self.callbacks.on_drag_start = Some(Box::new(hook));
        self
    }

    pub fn on_drag_end(mut self, hook: impl FnMut(usize, Option<&S>) + 'static) -> Self {
        self.callbacks.on_drag_end = Some(Box::new(hook));
        self
    }

    pub fn on_move(mut self, hook: impl FnMut() + 'static) -> Self {
        self.callbacks.on_move = Some(Box::new(hook));
        self
    }

    /// Parses overrides from JSON text. See [`SliderOptions::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// Reads overrides from a JSON object.
    ///
    /// Numbers may arrive as JSON numbers or numeric strings; anything else
    /// for `speed`/`startSlide` leaves the default in place. Flags accept
    /// booleans and `"true"`/`"false"`. Unknown keys land in `extra`.
    pub fn from_json(value: &Value) -> Result<Self, OptionsError> {
        let Value::Object(map) = value else {
            return Err(OptionsError::NotAnObject {
                found: json_type_name(value),
            });
        };

        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "speed" => options.speed = coerce_count(value).map(|v| v as u64),
                "startSlide" | "start_slide" => options.start_slide = coerce_count(value),
                "draggable" => options.draggable = coerce_flag(value),
                "mousewheel" => options.mousewheel = coerce_flag(value),
                "disableScroll" | "disable_scroll" => options.disable_scroll = coerce_flag(value),
                "stopPropagation" | "stop_propagation" => {
                    options.stop_propagation = coerce_flag(value)
                }
                "passive" => options.passive = coerce_flag(value),
                "ignoreSelector" | "ignore_selector" => {
                    options.ignore_selector = value.as_str().map(str::to_owned)
                }
                _ => {
                    options.extra.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(options)
    }
}

/// Non-negative integer from a JSON number or numeric string.
fn coerce_count(value: &Value) -> Option<usize> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if number.is_finite() && number >= 0.0 {
        Some(number.round() as usize)
    } else {
        None
    }
}

fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match text.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug)]
pub enum OptionsError {
    Json(serde_json::Error),
    NotAnObject { found: &'static str },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Json(err) => write!(f, "invalid slider options: {err}"),
            OptionsError::NotAnObject { found } => {
                write!(f, "slider options must be an object, found {found}")
            }
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Json(err) => Some(err),
            OptionsError::NotAnObject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for OptionsError {
    fn from(err: serde_json::Error) -> Self {
        OptionsError::Json(err)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
