/// Category addenda, checked in order against the lowercased unit name;
/// the first group with a matching substring wins.
const CATEGORY_PROMPTS: &[(&[&str], &str)] = &[
    (
        &["announcement"],
        " Focus on the announcements that were made, along with any important dates, releases, or action items.",
    ),
    (
        &["general"],
        " Focus on the main topics of conversation and any notable community activity.",
    ),
    (
        &["help", "support"],
        " Focus on the questions that were asked, whether they were resolved, and any recurring problems.",
    ),
    (
        &["dev", "development"],
        " Focus on technical discussions, decisions that were made, and ongoing work.",
    ),
    (
        &["idea", "suggestion"],
        " Focus on the ideas and suggestions that were raised and the feedback they received.",
    ),
    (
        &["feedback"],
        " Focus on the feedback that was shared and any common themes across it.",
    ),
];

const THREAD_FALLBACK: &str = " Make it brief but capture the key points of the thread discussion.";

/// Build the summarization instruction for one unit. Pure: no I/O, and
/// identical inputs always produce identical output.
pub fn select_prompt(unit_name: &str, is_thread: bool, lookback_days: i64) -> String {
    let noun = if is_thread { "thread" } else { "channel" };
    let mut instruction = format!(
        "You are a helpful assistant summarizing Discord messages. \
The following are messages from the past {} days in a Discord {} named \"{}\". \
Provide a concise but comprehensive summary of the discussion.",
        lookback_days, noun, unit_name
    );

    let lowered = unit_name.to_lowercase();
    let addendum = CATEGORY_PROMPTS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, addendum)| *addendum);

    match addendum {
        Some(addendum) => instruction.push_str(addendum),
        None if is_thread => instruction.push_str(THREAD_FALLBACK),
        None => {}
    }

    instruction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_yield_identical_output() {
        let first = select_prompt("general", false, 7);
        let second = select_prompt("general", false, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn first_matching_group_wins_for_dev_help() {
        // "dev-help" matches both the support and development groups;
        // the support group is listed first.
        let instruction = select_prompt("dev-help", false, 7);
        assert!(instruction.contains("questions that were asked"));
        assert!(!instruction.contains("technical discussions"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let instruction = select_prompt("ANNOUNCEMENTS", false, 7);
        assert!(instruction.contains("announcements that were made"));
    }

    #[test]
    fn every_category_keyword_selects_its_addendum() {
        let cases = [
            ("announcements", "announcements that were made"),
            ("general", "notable community activity"),
            ("help-desk", "questions that were asked"),
            ("support", "questions that were asked"),
            ("dev-log", "technical discussions"),
            ("development", "technical discussions"),
            ("ideas", "ideas and suggestions"),
            ("suggestions", "ideas and suggestions"),
            ("feedback", "common themes"),
        ];
        for (name, expected) in cases {
            let instruction = select_prompt(name, false, 7);
            assert!(
                instruction.contains(expected),
                "{} did not select the expected addendum",
                name
            );
        }
    }

    #[test]
    fn unmatched_thread_gets_thread_fallback() {
        let instruction = select_prompt("random-musings", true, 7);
        assert!(instruction.contains("key points of the thread discussion"));
    }

    #[test]
    fn unmatched_channel_gets_base_instruction_only() {
        let instruction = select_prompt("random-musings", false, 7);
        assert!(instruction.ends_with("summary of the discussion."));
    }

    #[test]
    fn lookback_days_and_noun_are_interpolated() {
        let instruction = select_prompt("random-musings", true, 14);
        assert!(instruction.contains("past 14 days"));
        assert!(instruction.contains("Discord thread named \"random-musings\""));
    }
}
