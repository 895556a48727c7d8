use hubby_core::Effect;

/// Whether the submit listener must call `preventDefault` for this dispatch.
pub fn blocks_submission(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, Effect::PreventSubmission))
}
