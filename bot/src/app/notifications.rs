//! Outbound message templates

use crate::domain::entities::FlairRequest;

/// Subject of the modmail sent on an emoji mismatch
pub const EMOJI_MISMATCH_SUBJECT: &str = "Flair Issue";

/// Subject of the end-of-run operator alert
pub const OPERATOR_ALERT_SUBJECT: &str = "Flair Bot Errors";

/// Explain an emoji mismatch and the three ways to resolve it
pub fn emoji_mismatch_message(
    request: &FlairRequest,
    flair_text: &str,
    form_url: &str,
    subreddit: &str,
) -> String {
    let emoji = request.requested_emoji.as_deref().unwrap_or("no emoji");
    let flair_text = flair_text.trim();

    format!(
        "Hello!\n\n\
        We received your flair request for **'{flair_text}'**, but you put **{emoji}** as your emoji. \
        Currently, we don't allow for emojis in flairs to include non-listed instruments, \
        so we can do one of the following:\n\n\
        **1)** Add **{emoji}** to the flair so you can use the **{emoji}** emoji \
        (reminder that you can only have a max of 4 flair items!)\n\n\
        **2)** Choose from **'{flair_text}'** for the emoji for your flair\n\n\
        **3)** You can resubmit the form to your liking, here: {form_url} \n\n\
        Just reply to us here on what you would like to do! \n\n\
        Thanks! - r/{subreddit} Mod Team"
    )
}

/// Operator alert body for a run that ended with errors
pub fn operator_alert_message(error_count: usize) -> String {
    format!(
        "{} error(s) found today. You should investigate!",
        error_count
    )
}
