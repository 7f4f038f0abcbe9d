const SAVE_SCORE_SCRIPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/scripts/SAVE_SCORE.lua"
));

pub fn save_score_script() -> &'static str {
    SAVE_SCORE_SCRIPT
}
