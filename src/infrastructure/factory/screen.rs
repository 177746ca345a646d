//! Read pipeline factory.

use crate::application::pipeline::ScreenPipeline;
use crate::application::scoring::ScoringEngine;
use crate::application::universe::UniverseFilter;
use crate::infrastructure::config::settings::Config;

use super::market::build_cache;

/// Build the cache → filter → engine → selector pipeline.
pub fn build_pipeline(config: &Config) -> ScreenPipeline {
    ScreenPipeline::new(
        build_cache(config),
        UniverseFilter::new(config.filter_config()),
        ScoringEngine::new(config.scoring_config()),
        config.top_k(),
        config.staleness_policy(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Profile;

    #[test]
    fn pipeline_takes_profile_top_k() {
        let mut config = Config::default();
        assert_eq!(build_pipeline(&config).top_k(), 10);

        config.screen = config.screen.with_profile(Profile::Discovery);
        assert_eq!(build_pipeline(&config).top_k(), 3);

        config.screen.top_k = Some(6);
        assert_eq!(build_pipeline(&config).top_k(), 6);
    }
}
