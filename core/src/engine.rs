//! The report engine — the facade the surrounding product talks to.
//!
//! RULES:
//!   - Every generation owns one fresh RNG stream seeded from its
//!     subject key. Streams are never shared or reused.
//!   - The clock is injected; nothing in here calls Utc::now() directly.
//!   - Validation failures become structured rejections. Empty content
//!     pools do not — they propagate, because they mean the pack
//!     upstream is broken and must fail loudly in integration.

use crate::clock::{Clock, SystemClock};
use crate::command::{EngineCommand, EngineResponse, INVALID_INPUT};
use crate::content::ContentConfig;
use crate::error::{EngineError, EngineResult};
use crate::facts::{self, Report};
use crate::unlock;
use serde_json::Value;

pub struct ReportEngine {
    config: ContentConfig,
    clock: Box<dyn Clock>,
}

impl ReportEngine {
    pub fn new(config: ContentConfig, clock: Box<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Fully wired engine: embedded content pack, wall clock.
    pub fn build() -> Self {
        Self::new(ContentConfig::default_pack(), Box::new(SystemClock))
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Generate a report for one validated-at-the-boundary request.
    pub fn generate(
        &self,
        name: Option<&str>,
        birth_date: &str,
        subject: &str,
    ) -> EngineResult<Report> {
        crate::command::validate_generate(birth_date, subject)?;
        facts::build_report(
            &self.config,
            self.clock.now(),
            name.unwrap_or(""),
            birth_date,
            subject,
        )
    }

    /// Teaser transform with the configured quota as the default.
    pub fn teaser(&self, pack: &Value, unlock_count: Option<usize>, is_paid: bool) -> Value {
        let quota = unlock_count.unwrap_or(self.config.unlock_per_category);
        unlock::apply_unlock(pack, quota, is_paid)
    }

    /// Dispatch one command into a structured response.
    ///
    /// InvalidInput is recovered here into a Rejected response; every
    /// other error crosses back to the caller as a hard failure.
    pub fn handle(&self, command: EngineCommand) -> EngineResult<EngineResponse> {
        match command {
            EngineCommand::GenerateReport {
                name,
                birth_date,
                subject,
                is_paid: _,
            } => match self.generate(name.as_deref(), &birth_date, &subject) {
                Ok(report) => Ok(EngineResponse::Report { report }),
                Err(EngineError::InvalidInput { field, reason }) => {
                    log::warn!("rejected generate: {field}: {reason}");
                    Ok(EngineResponse::Rejected {
                        code: INVALID_INPUT.to_string(),
                        reason: format!("{field}: {reason}"),
                    })
                }
                Err(other) => Err(other),
            },
            EngineCommand::ApplyTeaser {
                pack,
                unlock_count,
                is_paid,
            } => Ok(EngineResponse::Teaser {
                pack: self.teaser(&pack, unlock_count, is_paid),
            }),
        }
    }
}
