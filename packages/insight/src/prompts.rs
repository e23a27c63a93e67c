//! Prompt text for the extraction and illustration gateways.
//!
//! The extraction instructions codify the rank thresholds and the copy tone;
//! the structured-output schema derived from [`crate::types::BillData`]
//! carries the per-field guidance.

/// Instruction block sent alongside the PDF payload.
pub const BILL_INSTRUCTIONS: &str = r#"Analyze this electric bill PDF.

LOGIC FOR ENERGY SAVER RANK:
Compare the current month's usage to the previous year's same month.
Calculate the percentage change in usage: ((usageCurrent - usagePrevious) / usagePrevious) * 100
Note: A negative percentage means usage decreased (good), positive means usage increased.

Rank Assignment (based SOLELY on usage reduction, NOT cost):
- G.O.A.T.: Usage decreased by >20% (usageCurrent < usagePrevious by more than 20%)
- All-Star: Usage decreased by 10-20% (usageCurrent < usagePrevious by 10-20%)
- Pro: Usage decreased by 1-10% (usageCurrent < usagePrevious by 1-10%)
- Amateur: Usage increased OR no decrease (usageCurrent >= usagePrevious)

IMPORTANT: Rank is based ONLY on usage reduction percentage. Cost may increase due to rate changes, but that doesn't affect the rank if usage decreased.

Percentage to Next Level Calculation:
Calculate the current usage reduction percentage: ((usagePrevious - usageCurrent) / usagePrevious) * 100
- If Amateur (0% or negative reduction): Need 1% total reduction to reach Pro, so return 1 (or 1 - current% if already positive)
- If Pro (1-10% reduction): Need 10% total reduction to reach All-Star, so return (10 - current%)
- If All-Star (10-20% reduction): Need 20% total reduction to reach G.O.A.T., so return (20 - current%)
- If G.O.A.T. (>20% reduction): Return 0

Next Rank Assignment:
- If Amateur: nextRank = "Pro"
- If Pro: nextRank = "All-Star"
- If All-Star: nextRank = "G.O.A.T."
- If G.O.A.T.: nextRank = "" (empty string)

TONE: Little Wins Tone
Warm. Encouraging. Calm. Focused on micro-wins and building confidence.

Core voice:
Light, friendly, reassuring. Feels like a quiet coach helping you find momentum. Always focuses on one doable next step.

How it sounds:
- "You are doing more right than you think."
- "Here is a small win you can take today."
- "Let me show you something simple in your bill that can help you feel more in control."
- "This change may look small, but it can make your month feel easier."
- "If you want another idea, I can help you find the next one."

When reviewing a bill:
- "I looked at your usage and saw one place where a small change could help bring your bill down a bit."
- "Here is a simple step that gives people like you a quick win."
- "This one usually feels easy and has a fast payoff."
- "If you would like to try one more, I can help you find it."

Emotional goal:
Micro serotonin. Relief. Momentum. A sense that progress is possible right now.

For rankDescription:
- Start with acknowledging what they're doing right or a small win they've achieved
- Focus on one simple, doable next step
- Use warm, encouraging language
- Make them feel that progress is possible right now

Extract all data into the JSON structure:"#;

/// Fixed prefix for the rank badge illustration.
pub const RANK_BADGE_PREFIX: &str = "Generate a high quality 3D AI rendered cartoon character representing an Energy Saver Rank. The character should be cute, friendly, and colorful - like a cartoon mascot. The character should be shown from the front, centered, with a warm and friendly expression. Style should be 3D rendered, cute, and gamified - similar to animated cartoon characters.";

/// Fixed prefix for the persona portrait illustration.
pub const PERSONA_PREFIX: &str = "Generate a high quality, realistic photo portrait of a friendly African American woman neighbor, smiling and looking helpful. She should be dressed casually in a jacket or sweater, standing near a brick house or front porch. The style should be warm and inviting, like a real photograph.";

/// Build the rank badge prompt from the bill's visual prompt.
pub fn rank_badge_prompt(visual_prompt: &str) -> String {
    format!("{} {}", RANK_BADGE_PREFIX, visual_prompt)
}

/// Build the persona portrait prompt.
pub fn persona_prompt(prompt: &str) -> String {
    format!("{} {}", PERSONA_PREFIX, prompt)
}

/// Build the collage instruction block for a given energy tip.
///
/// Sent together with a base reference image whose rendering style the
/// generated room view must match.
pub fn collage_prompt(tip: &str) -> String {
    format!(
        r#"Create an image visualizing the energy tip: "{tip}".

Instructions:
1. **Analyze Style**: Look at the provided input image. Understand its rendering style (e.g. blue blueprint, 3d wireframe, realistic photo, or sketch).
2. **Determine Room**: Identify the single best room for the tip (e.g. Kitchen for microwave/cooking, Bathroom for water, Living Room for thermostat).
3. **GENERATE NEW IMAGE**: Generate a close-up, interior view of ONLY that specific room. Do NOT show the whole house or floor plan.
4. **Apply Style**: Ensure this new image uses the EXACT SAME visual style as the input image.
5. **Integrate Text**: In the style of the image (e.g. as a blueprint label, a sticky note, or integrated text), clearly write the energy tip text "{tip}" inside the image near the relevant object."#
    )
}
