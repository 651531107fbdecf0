//! # Event Extraction
//!
//! Programs emit events as `Program data: <base64>` lines whose payload starts
//! with the event's [`EventDiscriminator`]. This module matches those payloads
//! against caller-supplied [`EventConfig`]s and decodes them into typed values.
//!
//! The crate knows nothing about any program's schema. The caller picks one
//! output type `T` per extraction (typically an enum with one variant per event,
//! the way a connector wraps all events of its program) and provides a decoder
//! per event name.

use crate::{
    discriminator::{
        compute_discriminator, DiscriminatorCache, EventDiscriminator, DISCRIMINATOR_LEN,
    },
    lenient::skip_on_error,
    logs::parse_log_data,
    scopes::filter_logs_by_program,
};
use borsh::BorshDeserialize;
use std::fmt;

/// A boxed payload decoder. Receives the bytes following the discriminator.
pub type DecodeFn<T> = Box<dyn Fn(&[u8]) -> anyhow::Result<T> + Send + Sync>;

/// Associates an event name and its discriminator with a payload decoder.
pub struct EventConfig<T> {
    pub name: String,
    pub discriminator: EventDiscriminator,
    decode: DecodeFn<T>,
}

impl<T> EventConfig<T> {
    pub fn new<F>(name: impl Into<String>, decode: F) -> Self
    where
        F: Fn(&[u8]) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let name = name.into();
        Self {
            discriminator: compute_discriminator(&name),
            name,
            decode: Box::new(decode),
        }
    }

    /// Same as [`EventConfig::new`], but looks the discriminator up in `cache`.
    pub fn with_cache<F>(cache: &DiscriminatorCache, name: impl Into<String>, decode: F) -> Self
    where
        F: Fn(&[u8]) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let name = name.into();
        Self {
            discriminator: cache.discriminator(&name),
            name,
            decode: Box::new(decode),
        }
    }

    /// A config for a Borsh-serialised event `E`, mapped into `T` by `wrap`.
    pub fn borsh<E, F>(name: impl Into<String>, wrap: F) -> Self
    where
        E: BorshDeserialize + 'static,
        F: Fn(E) -> T + Send + Sync + 'static,
        T: 'static,
    {
        Self::new(name, move |payload: &[u8]| {
            let event = E::try_from_slice(payload)?;
            Ok(wrap(event))
        })
    }

    pub fn decode(&self, payload: &[u8]) -> anyhow::Result<T> {
        (self.decode)(payload)
    }
}

impl<T> fmt::Debug for EventConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventConfig")
            .field("name", &self.name)
            .field("discriminator", &self.discriminator)
            .finish_non_exhaustive()
    }
}

/// An event recovered from a log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEvent<T> {
    pub name: String,
    pub data: T,
    /// The full decoded payload, discriminator included.
    pub raw: Vec<u8>,
}

/// Recovers every event in `logs` that matches one of `configs`.
///
/// Output follows log order, then config order within a line. A payload matching
/// several configs yields several events. Payloads a decoder rejects are dropped
/// with a warning.
pub fn extract_events<S, T>(logs: &[S], configs: &[EventConfig<T>]) -> Vec<ExtractedEvent<T>>
where
    S: AsRef<str>,
{
    let mut events = Vec::new();

    for line in logs {
        let Some(raw) = parse_log_data(line.as_ref()) else {
            continue;
        };
        if raw.len() < DISCRIMINATOR_LEN {
            continue;
        }

        for config in configs {
            if !config.discriminator.is_prefix_of(&raw) {
                continue;
            }
            let decoded = config.decode(&raw[DISCRIMINATOR_LEN..]);
            if let Some(data) = skip_on_error(&config.name, decoded) {
                events.push(ExtractedEvent {
                    name: config.name.clone(),
                    data,
                    raw: raw.clone(),
                });
            }
        }
    }

    events
}

/// A reusable set of event configs sharing one discriminator cache.
///
/// Meant for long-lived services that parse many transactions with the same
/// set of events.
#[derive(Debug)]
pub struct EventExtractor<T> {
    cache: DiscriminatorCache,
    configs: Vec<EventConfig<T>>,
}

impl<T> Default for EventExtractor<T> {
    fn default() -> Self {
        Self {
            cache: DiscriminatorCache::new(),
            configs: Vec::new(),
        }
    }
}

impl<T> EventExtractor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decoder for the event `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, decode: F) -> &mut Self
    where
        F: Fn(&[u8]) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let config = EventConfig::with_cache(&self.cache, name, decode);
        self.configs.push(config);
        self
    }

    /// Registers a ready-made config.
    pub fn register_config(&mut self, config: EventConfig<T>) -> &mut Self {
        self.configs.push(config);
        self
    }

    pub fn configs(&self) -> &[EventConfig<T>] {
        &self.configs
    }

    pub fn cache(&self) -> &DiscriminatorCache {
        &self.cache
    }

    pub fn extract<S: AsRef<str>>(&self, logs: &[S]) -> Vec<ExtractedEvent<T>> {
        extract_events(logs, &self.configs)
    }

    /// Extracts only events emitted inside invocation scopes of `program_id`.
    pub fn extract_for_program<S: AsRef<str>>(
        &self,
        logs: &[S],
        program_id: &str,
    ) -> Vec<ExtractedEvent<T>> {
        let scoped = filter_logs_by_program(logs, program_id);
        extract_events(&scoped, &self.configs)
    }
}
