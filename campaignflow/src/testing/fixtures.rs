//! Test fixtures for campaign snapshots.

use crate::models::{Campaign, CampaignStats, CommunityProfile};

/// A fluent builder for campaign snapshots.
#[derive(Debug, Clone)]
pub struct CampaignBuilder {
    campaign: Campaign,
}

impl CampaignBuilder {
    /// Creates a builder for an empty campaign.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            campaign: Campaign::new(id),
        }
    }

    /// Fills in a complete briefing.
    #[must_use]
    pub fn briefed(self) -> Self {
        self.product_context("Our tool helps teams triage bug reports")
            .keywords(["bug tracker", "triage", "issues", "jira", "linear"])
            .subreddits(["programming"])
    }

    /// Sets the product context.
    #[must_use]
    pub fn product_context(mut self, context: impl Into<String>) -> Self {
        self.campaign.product_context = Some(context.into());
        self
    }

    /// Sets the keywords.
    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.campaign = self.campaign.with_keywords(keywords);
        self
    }

    /// Sets the target subreddits.
    #[must_use]
    pub fn subreddits<I, S>(mut self, subreddits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.campaign = self.campaign.with_target_subreddits(subreddits);
        self
    }

    /// Sets the collected post count.
    #[must_use]
    pub fn posts_collected(mut self, count: u64) -> Self {
        self.campaign.stats.posts_collected = count;
        self
    }

    /// Sets the generated draft count.
    #[must_use]
    pub fn drafts_generated(mut self, count: u64) -> Self {
        self.campaign.stats.drafts_generated = count;
        self
    }

    /// Replaces the stats wholesale.
    #[must_use]
    pub fn stats(mut self, stats: CampaignStats) -> Self {
        self.campaign.stats = stats;
        self
    }

    /// Builds the campaign.
    #[must_use]
    pub fn build(self) -> Campaign {
        self.campaign
    }
}

/// Creates `count` profiles for a campaign, one per numbered subreddit.
#[must_use]
pub fn profiles_for(campaign_id: &str, count: usize) -> Vec<CommunityProfile> {
    (1..=count)
        .map(|n| CommunityProfile::new(format!("p{n}"), format!("r{n}")).with_campaign_id(campaign_id))
        .collect()
}
