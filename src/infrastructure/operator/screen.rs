//! Screening operator implementation.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::application::pipeline::Screening;
use crate::application::selection::select;
use crate::domain::profile::Profile;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::llm::build_decision_maker;
use crate::infrastructure::factory::screen::build_pipeline;
use crate::port::inbound::operator::screen::{
    ScreenOperator, ScreenRequest, ScreenView, SelectionView,
};

use super::entry::Operator;

#[async_trait]
impl ScreenOperator for Operator {
    fn rank(&self, request: &ScreenRequest) -> Result<ScreenView> {
        let config = Self::load_screen_config(request)?;
        let screening = build_pipeline(&config).run(Utc::now())?;
        Ok(Self::view(config.screen.profile, screening))
    }

    async fn select(&self, request: &ScreenRequest) -> Result<SelectionView> {
        let config = Self::load_screen_config(request)?;
        config.validate_selection()?;
        let screening = build_pipeline(&config).run(Utc::now())?;
        let decision_maker = build_decision_maker(&config)?;

        let selection = select(
            &screening,
            decision_maker.as_ref(),
            &config.selection_policy(),
        )
        .await?;
        info!(
            decided_by = %selection.decided_by,
            picks = ?selection.picks,
            "Selection complete"
        );

        Ok(SelectionView {
            screen: Self::view(config.screen.profile, screening),
            selection,
        })
    }
}

impl Operator {
    fn load_screen_config(request: &ScreenRequest) -> Result<Config> {
        let mut config = Self::parse_config(&request.config_toml)?;
        if let Some(profile) = request.profile {
            config.screen = config.screen.with_profile(profile);
        }
        if let Some(top_k) = request.top_k {
            config.screen.top_k = Some(top_k);
        }
        config.screen.validate()?;
        Ok(config)
    }

    fn view(profile: Profile, screening: Screening) -> ScreenView {
        ScreenView {
            profile,
            captured_at: screening.captured_at,
            age_secs: screening.age.num_seconds(),
            state: screening.state,
            universe: screening.universe,
            dropped: screening.dropped,
            eligible: screening.eligible,
            ranked: screening.ranked,
            top: screening.top,
        }
    }
}
