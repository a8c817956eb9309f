//! Tests for stage computation.

#[cfg(test)]
mod tests {
    use crate::core::{StageId, StageStatus};
    use crate::models::{Campaign, CampaignStats, CommunityProfile};
    use crate::stages::{
        completion_flags, compute_stages, get_current_stage, stages_from_flags, Stage,
    };
    use crate::testing::{assert_single_active, assert_stage_flags, CampaignBuilder};
    use pretty_assertions::assert_eq;

    fn briefed_campaign() -> Campaign {
        CampaignBuilder::new("c1").briefed().build()
    }

    #[test]
    fn test_new_campaign_starts_at_briefing() {
        let stages = compute_stages(&Campaign::new("c1"), &[]);

        assert_stage_flags(&stages[0], false, true, false);
        assert_stage_flags(&stages[1], false, false, true);
        assert_stage_flags(&stages[2], false, false, true);
        assert_stage_flags(&stages[3], false, false, true);
        assert_eq!(get_current_stage(&stages), StageId::Briefing);
    }

    #[test]
    fn test_stage_metadata() {
        let stages = compute_stages(&Campaign::new("c1"), &[]);
        let ids: Vec<u8> = stages.iter().map(|s| s.id.as_u8()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        assert_eq!(stages[0].name, "Project Briefing");
        assert_eq!(stages[3].name, "Alchemical Transmutation");
        assert_eq!(stages[0].url, "/dashboard/campaigns/c1/edit");
        assert_eq!(stages[1].url, "/dashboard/campaigns/c1/collect");
        assert_eq!(stages[2].url, "/dashboard/campaigns/c1/profiles");
        assert_eq!(stages[3].url, "/dashboard/campaigns/c1/drafts/new");
    }

    #[test]
    fn test_missing_product_context_keeps_briefing_active() {
        let cases = [
            CampaignBuilder::new("c1").keywords(["a"]).subreddits(["r"]).build(),
            CampaignBuilder::new("c1")
                .product_context("")
                .keywords(["a"])
                .subreddits(["r"])
                .posts_collected(10)
                .build(),
        ];

        for campaign in &cases {
            let stages = compute_stages(campaign, &[]);
            assert!(!stages[0].completed);
            assert!(stages[0].active);
            assert!(stages[1].locked);
        }
    }

    #[test]
    fn test_briefing_needs_keywords_and_subreddits() {
        let no_keywords = CampaignBuilder::new("c1")
            .product_context("Ctx")
            .keywords(Vec::<String>::new())
            .subreddits(["r"])
            .build();
        assert!(!compute_stages(&no_keywords, &[])[0].completed);

        let no_subreddits = CampaignBuilder::new("c1")
            .product_context("Ctx")
            .keywords(["a"])
            .build();
        assert!(!compute_stages(&no_subreddits, &[])[0].completed);

        assert!(compute_stages(&briefed_campaign(), &[])[0].completed);
    }

    #[test]
    fn test_whitespace_product_context_counts_as_present() {
        let campaign = CampaignBuilder::new("c1")
            .product_context(" ")
            .keywords(["a"])
            .subreddits(["r"])
            .build();
        assert!(compute_stages(&campaign, &[])[0].completed);
    }

    #[test]
    fn test_briefed_campaign_moves_to_selection() {
        let stages = compute_stages(&briefed_campaign(), &[]);

        assert_stage_flags(&stages[0], true, false, false);
        assert_stage_flags(&stages[1], false, true, false);
        assert_stage_flags(&stages[2], false, false, true);
        assert_stage_flags(&stages[3], false, false, true);
        assert_eq!(get_current_stage(&stages), StageId::Selection);
    }

    #[test]
    fn test_posts_without_briefing_leave_two_stages_active() {
        let campaign = CampaignBuilder::new("c1").posts_collected(3).build();
        let stages = compute_stages(&campaign, &[]);

        let active: Vec<StageId> = stages.iter().filter(|s| s.active).map(|s| s.id).collect();
        assert_eq!(active, vec![StageId::Briefing, StageId::Intelligence]);
        assert_stage_flags(&stages[1], true, false, true);
        assert_stage_flags(&stages[3], false, false, true);
        assert_eq!(get_current_stage(&stages), StageId::Briefing);
    }

    #[test]
    fn test_active_stage_locks_everything_after_it() {
        let campaign = CampaignBuilder::new("c1").briefed().posts_collected(4).build();
        let stages = compute_stages(&campaign, &[]);

        assert_stage_flags(&stages[0], true, false, false);
        assert_stage_flags(&stages[1], true, false, false);
        assert_stage_flags(&stages[2], false, true, false);
        assert_stage_flags(&stages[3], false, false, true);
        assert_eq!(get_current_stage(&stages), StageId::Intelligence);
    }

    #[test]
    fn test_later_work_with_unfinished_briefing() {
        let campaign = CampaignBuilder::new("c1")
            .posts_collected(5)
            .drafts_generated(2)
            .build();
        let stages = compute_stages(&campaign, &[CommunityProfile::new("p1", "r1")]);

        assert_stage_flags(&stages[0], false, true, false);
        assert_stage_flags(&stages[1], true, false, true);
        assert_stage_flags(&stages[2], true, false, false);
        assert_stage_flags(&stages[3], true, false, false);
        assert_eq!(stages[1].status(), StageStatus::Completed);
        assert_eq!(get_current_stage(&stages), StageId::Briefing);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let campaign = briefed_campaign();
        let profiles = vec![CommunityProfile::new("p1", "r1")];

        assert_eq!(
            compute_stages(&campaign, &profiles),
            compute_stages(&campaign, &profiles)
        );
    }

    #[test]
    fn test_collecting_posts_only_changes_selection() {
        let before_campaign = briefed_campaign();
        let after_campaign = CampaignBuilder::new("c1").briefed().posts_collected(3).build();

        let before = compute_stages(&before_campaign, &[]);
        let after = compute_stages(&after_campaign, &[]);

        assert!(!before[1].completed);
        assert!(after[1].completed);
        assert!(before[2].locked);
        assert!(!after[2].locked);

        for i in [0, 2, 3] {
            assert_eq!(before[i].completed, after[i].completed);
        }
    }

    #[test]
    fn test_all_complete_has_no_active_stage() {
        let campaign = CampaignBuilder::new("c1")
            .briefed()
            .posts_collected(1)
            .drafts_generated(1)
            .build();
        let stages = compute_stages(&campaign, &[CommunityProfile::new("p1", "r1")]);

        assert!(stages.iter().all(|s| s.completed && !s.active && !s.locked));
        assert_eq!(get_current_stage(&stages), StageId::Drafting);
    }

    #[test]
    fn test_current_stage_of_empty_list() {
        let stages: Vec<Stage> = Vec::new();
        assert_eq!(get_current_stage(&stages), StageId::Drafting);
    }

    #[test]
    fn test_end_to_end_example() {
        let campaign = Campaign::new("c1")
            .with_product_context("Our tool helps X")
            .with_keywords(["a", "b", "c", "d", "e"])
            .with_target_subreddits(["r1"])
            .with_stats(CampaignStats::new(3, 0));
        let profiles = vec![CommunityProfile::new("p1", "r1")];

        let stages = compute_stages(&campaign, &profiles);
        let flags: Vec<(u8, bool, bool, bool)> = stages
            .iter()
            .map(|s| (s.id.as_u8(), s.completed, s.active, s.locked))
            .collect();

        assert_eq!(
            flags,
            vec![
                (1, true, false, false),
                (2, true, false, false),
                (3, true, false, false),
                (4, false, true, false),
            ]
        );
        assert_eq!(get_current_stage(&stages).as_u8(), 4);
    }

    #[test]
    fn test_flag_derivation_over_every_combination() {
        for mask in 0u8..16 {
            let completed = [0, 1, 2, 3].map(|bit| mask & (1 << bit) != 0);
            let stages = stages_from_flags("c1", completed);

            for (n, stage) in stages.iter().enumerate() {
                let predecessor = if n == 0 { true } else { completed[n - 1] };
                assert_eq!(stage.completed, completed[n], "mask {mask:04b} stage {n}");
                assert_eq!(stage.locked, !predecessor, "mask {mask:04b} stage {n}");
                assert_eq!(
                    stage.active,
                    predecessor && !completed[n],
                    "mask {mask:04b} stage {n}"
                );
            }

            let is_prefix = completed.windows(2).all(|w| w[0] || !w[1]);
            let first_active = stages.iter().find(|s| s.active).map(|s| s.id);

            if completed.iter().all(|c| *c) {
                assert!(first_active.is_none());
            } else if is_prefix {
                assert_single_active(&stages);
            }
            assert_eq!(
                get_current_stage(&stages),
                first_active.unwrap_or(StageId::Drafting),
                "mask {mask:04b}"
            );
            assert!(!stages[0].locked);
        }
    }

    #[test]
    fn test_completion_flags_follow_inputs() {
        let campaign = CampaignBuilder::new("c1")
            .briefed()
            .drafts_generated(1)
            .build();
        assert_eq!(completion_flags(&campaign, &[]), [true, false, false, true]);
    }

    #[test]
    fn test_stage_serializes_with_integer_id() {
        let stages = compute_stages(&Campaign::new("c1"), &[]);
        let json = serde_json::to_value(&stages[1]).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "name": "Strategic Selection",
                "description": "Collect and filter relevant Reddit posts",
                "completed": false,
                "active": false,
                "locked": true,
                "url": "/dashboard/campaigns/c1/collect"
            })
        );

        let back: Stage = serde_json::from_value(json).unwrap();
        assert_eq!(back, stages[1]);
    }
}
