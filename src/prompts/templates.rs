use super::GridMode;

/// Upper bound on tokens generated for the descriptive stage.
pub const DESCRIPTION_MAX_TOKENS: u32 = 4000;

/// Stage-one instruction: ask the vision model for a single-paragraph
/// description of the photographed subject, specific enough that a
/// downstream generator can keep the face consistent across panels.
pub fn describe_instruction() -> &'static str {
    r#"Analyze this image and create a detailed character/subject description for AI image generation.

FOCUS ON THESE DETAILS:

1. **FACE** (most critical for consistency):
   - Face shape (oval, square, round, heart)
   - Skin tone (specific shade: pale, fair, olive, tan, brown, dark)
   - Eye color and shape
   - Nose and lip characteristics
   - Facial hair (if any) - exact style and color
   - Age range and distinguishing marks

2. **HAIR**:
   - Exact color (chestnut brown, jet black, platinum blonde, etc.)
   - Style (straight, curly, wavy, braided, dreadlocks)
   - Length and how it falls

3. **CLOTHING & ACCESSORIES**:
   - Each visible piece with colors and materials
   - Jewelry, glasses, hats, etc.

4. **POSE & EXPRESSION**:
   - Body position
   - Facial expression and mood
   - Direction of gaze

5. **SETTING & LIGHTING**:
   - Environment/background
   - Lighting direction and quality
   - Atmosphere

OUTPUT: Write a single detailed paragraph describing this exact person/subject. Be extremely specific about facial features so AI can maintain consistency across multiple images. Start directly with the description - no preamble."#
}

/// Stage-two template: interpolates the normalized character description
/// into the mode's grid-generation prompt.
///
/// Every template demands a borderless edge-to-edge 3x3 layout and the same
/// person with identical features in all 9 panels; thumbnail mode demands
/// per-panel variety of angle, pose and expression on top of that, never
/// variety of identity.
pub fn grid_prompt(mode: GridMode, description: &str) -> String {
    match mode {
        GridMode::Angles => format!(
            r#"Create a seamless 3x3 grid of 9 cinematic camera angles showing: {}

GRID REQUIREMENTS:
- NO white borders or gaps between panels
- Each panel edge-to-edge, flowing into the next
- The SAME EXACT person in ALL 9 panels - identical face, identical features

9 CAMERA ANGLES (left to right, top to bottom):
1. WIDE SHOT - full body, environment visible
2. MEDIUM WIDE - head to knees
3. MEDIUM SHOT - waist up, classic portrait
4. MEDIUM CLOSE-UP - chest and head
5. CLOSE-UP - face fills 70% of frame
6. THREE-QUARTER VIEW - face angled 45°, dramatic
7. LOW ANGLE - camera below eye level, heroic
8. HIGH ANGLE - camera above, looking down
9. PROFILE - side view with rim lighting

CRITICAL: Face must be clearly visible in ALL panels. Same skin tone, same facial structure, same person throughout. Cinematic, photorealistic, 8K quality."#,
            description
        ),

        GridMode::Thumbnail => format!(
            r#"Create a seamless 3x3 grid of 9 YouTube thumbnail variations showing: {}

GRID REQUIREMENTS:
- NO white borders or gaps between panels
- Each panel edge-to-edge, flowing into the next
- The SAME EXACT person in ALL 9 panels - identical face, identical features

9 THUMBNAIL COMPOSITIONS (each COMPLETELY DIFFERENT camera angle and pose):
1. WIDE ACTION SHOT - full body in dynamic motion, running or jumping
2. MEDIUM SHOT - waist up, pointing directly at camera with urgency
3. EXTREME CLOSE-UP - only eyes and forehead filling frame, intense stare
4. SHOCKED REACTION - hands on cheeks, mouth wide open, surprised
5. OVER-SHOULDER LOOK - turning back toward camera, mysterious glance
6. LOW ANGLE HERO - camera below looking up, powerful dominant pose
7. SIDE PROFILE - dramatic rim lighting, thoughtful or determined look
8. CELEBRATION - fist pump or arms raised high, pure joy and excitement
9. CURIOUS/CONFUSED - head tilted, one eyebrow raised, questioning expression

Optional per panel: a short 1-2 word text overlay ("WOW!", "NO WAY!", "INSANE!", "WHAT?!") and a distinct color scheme.

CRITICAL RULES:
- Each panel MUST have DIFFERENT camera angle (wide/medium/close-up/extreme close-up)
- Each panel MUST have DIFFERENT body pose and gesture
- Each panel MUST have DIFFERENT facial expression
- This is NOT about color filters - it's about VARIETY in composition
- YouTube thumbnail energy: clickbait-worthy, dramatic, eye-catching
- Photorealistic quality, professional lighting"#,
            description
        ),

        GridMode::Storyboard => format!(
            r#"Create a seamless 3x3 grid of 9 sequential storyboard panels showing: {}

GRID REQUIREMENTS:
- NO white borders or gaps between panels
- Each panel edge-to-edge, flowing into the next
- The SAME EXACT person in ALL 9 panels - identical face, identical features

9 STORY BEATS (read left to right, top to bottom):
1. ESTABLISHING - calm moment, wide shot
2. TENSION - notices something, medium shot
3. REACTION - close-up, concern/interest
4. ACTION BEGINS - starts moving, wide shot
5. PEAK ACTION - dynamic movement, medium
6. INTENSITY - extreme close-up, emotion
7. CLIMAX - dramatic action, full body
8. RESOLUTION - medium shot, conflict ending
9. CONCLUSION - close-up, final emotion

CRITICAL: Same character throughout. Time progresses but person stays consistent. Cinematic storyboard quality, film-like."#,
            description
        ),

        GridMode::Freeform => format!(
            "Create a seamless 3x3 grid showing 9 variations of: {}. \
             NO borders, NO gaps. The SAME person with identical features in all 9 panels. \
             Photorealistic, cinematic.",
            description
        ),
    }
}
