//! Document themes and subsection styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylesheet emitted into the `<head>` of a root-level document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// No stylesheet. Best when the HTML is never a standalone file.
    None,
    /// Light gradients with heavy borders.
    Classic,
    /// Light pastel backgrounds.
    #[default]
    Light,
    /// Light solid colors, no borders.
    LightFlat,
    /// Dark backgrounds with colored borders.
    Dark,
    /// Dark solid colors, no borders.
    DarkFlat,
    /// Dark gradients.
    DarkGradient,
}

impl Theme {
    /// The `<style>` block for this theme.
    pub fn css(&self) -> &'static str {
        match self {
            Theme::None => "",
            Theme::Classic => CLASSIC_CSS,
            Theme::Light => LIGHT_CSS,
            Theme::LightFlat => LIGHT_FLAT_CSS,
            Theme::Dark => DARK_CSS,
            Theme::DarkFlat => DARK_FLAT_CSS,
            Theme::DarkGradient => DARK_GRADIENT_CSS,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "none" | "plain" => Ok(Theme::None),
            "classic" => Ok(Theme::Classic),
            "light" | "default" => Ok(Theme::Light),
            "light_flat" | "lightflat" => Ok(Theme::LightFlat),
            "dark" => Ok(Theme::Dark),
            "dark_flat" | "darkflat" => Ok(Theme::DarkFlat),
            "dark_gradient" | "darkgradient" => Ok(Theme::DarkGradient),
            _ => Err(format!("unknown theme: {}", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::None => write!(f, "none"),
            Theme::Classic => write!(f, "classic"),
            Theme::Light => write!(f, "light"),
            Theme::LightFlat => write!(f, "light_flat"),
            Theme::Dark => write!(f, "dark"),
            Theme::DarkFlat => write!(f, "dark_flat"),
            Theme::DarkGradient => write!(f, "dark_gradient"),
        }
    }
}

/// CSS class selecting the border/background of an embedded block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStyle {
    #[default]
    Neutral,
    PassingTestResult,
    FailingTestResult,
    InconclusiveTestResult,
    ImpliedGood,
    ImpliedCaution,
    ImpliedBad,
    OldParchment,
    Plate,
    Exception,
    DecafGreen,
    DecafOrange,
    DecafGreenLightRoast,
    DecafOrangeLightRoast,
}

impl SectionStyle {
    /// The CSS class name.
    pub fn css_class(&self) -> &'static str {
        match self {
            SectionStyle::Neutral => "neutral",
            SectionStyle::PassingTestResult => "passing_test_result",
            SectionStyle::FailingTestResult => "failing_test_result",
            SectionStyle::InconclusiveTestResult => "inconclusive_test_result",
            SectionStyle::ImpliedGood => "implied_good",
            SectionStyle::ImpliedCaution => "implied_caution",
            SectionStyle::ImpliedBad => "implied_bad",
            SectionStyle::OldParchment => "old_parchment",
            SectionStyle::Plate => "plate",
            SectionStyle::Exception => "exception",
            SectionStyle::DecafGreen => "decaf_green",
            SectionStyle::DecafOrange => "decaf_orange",
            SectionStyle::DecafGreenLightRoast => "decaf_green_light_roast",
            SectionStyle::DecafOrangeLightRoast => "decaf_orange_light_roast",
        }
    }
}

impl fmt::Display for SectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

// Collapsing works without script: a hidden checkbox precedes each
// `lvl-*` block and the sibling selector reveals it when checked.
const LIGHT_CSS: &str = r#"<style>
    html { font-family: sans-serif; }
    [class*='lvl-'] { display: none; cursor: auto; }
    input:checked~[class*='lvl-'] { display: block; }
    .gone { display: none; }
    .boolog { font-family: sans-serif; border-radius: 0.25em; border: 0.1em solid black; display: inline-block; background-color: #f1faff; }
    .failing_test_result { background-color: #ffb1a6; }
    .inconclusive_test_result { background-color: #fffbb9; }
    .passing_test_result { background-color: #c6ffad; }
    .implied_good { background-color: #e4ffd8; }
    .implied_caution { background-color: #fffdd8; }
    .implied_bad { background-color: #f6c6bd; }
    .neutral { background-color: #ebf4fa; }
    .old_parchment { background-color: #ffffc2; }
    .plate { background-color: #dbe9fa; }
    .exception { background-image: linear-gradient(to bottom right, #fff2a6, #ffb0a6); }
    .decaf_green { background-color: #b0c6b2; }
    .decaf_orange { background-color: #eed886; }
    .decaf_green_light_roast { background-color: #dce9dd; }
    .decaf_orange_light_roast { background-color: #f2e5b4; }
    table, th, td { padding: 0.1em 0em; margin-left: auto; margin-right: auto; }
    td.min { width: 1%; white-space: nowrap; }
    h1 { font-size: 3em; margin: 0em; }
    h2 { font-size: 1.75em; margin: 0.2em; }
    hr { border: none; height: 0.2em; background-color: black; }
    .centered { text-align: center; }
    .highlighted { background-color: yellow; }
    .outlined { display: inline-block; border-radius: 0.5em; border: 0.05em solid black; padding: 0.2em 0.2em; }
    .object { border-radius: 1.5em; border: 0.1em solid black; display: inline-block; padding: 0.4em 0.4em; }
    .incoming { border-radius: 3em 0.5em 0.5em 3em; border: 0.1em solid black; display: inline-block; padding: 1em 1em; }
    .outgoing { border-radius: 0.5em 3em 3em 0.5em; border: 0.1em solid black; display: inline-block; padding: 1em 1em; }
    .left_justified { float: left; }
    table.gridlines, table.gridlines th, table.gridlines td { padding: 0.4em 0.4em; border-collapse: collapse; border: 0.02em solid black; }
    label { cursor: pointer; }
</style>
"#;

const DARK_CSS: &str = r#"<style>
    html { font-family: sans-serif; background-color: #101010; color: ghostwhite; }
    [class*='lvl-'] { display: none; cursor: auto; }
    input:checked~[class*='lvl-'] { display: block; }
    .gone { display: none; }
    .boolog { font-family: sans-serif; border-radius: 0.25em; border: 0.5em solid ghostwhite; display: inline-block; }
    .failing_test_result { border: 0.5em solid #f62817; color: #f62817; background-color: #210002; }
    .inconclusive_test_result { border: 0.5em solid #ffef00; color: #ffef00; background-color: #212000; }
    .passing_test_result { border: 0.5em solid #59e817; color: #59e817; background-color: #012100; }
    .implied_good { border: 0.5em solid #00fa9a; color: #00fa9a; background-color: #012100; }
    .implied_caution { border: 0.5em solid #ffffc2; color: #ffffc2; background-color: #212000; }
    .implied_bad { border: 0.5em solid #fa8072; color: #fa8072; background-color: #210002; }
    .neutral { border: 0.5em solid #6495ed; color: #add8e6; background-color: #000921; }
    .old_parchment { border: 0.5em solid #ffffc2; color: #ffffc2; background-color: #1c1c10; }
    .plate { border: 0.5em solid #b0c4de; color: #b0c4de; background-color: #0c1118; }
    .exception { border: 0.5em solid #ff7f50; color: #ffdab9; background-image: linear-gradient(to bottom right, #2a1f00, #2a0500); }
    .decaf_green { border: 0.5em solid #b0c6b2; color: #b0c6b2; background-color: #0d140e; }
    .decaf_orange { border: 0.5em solid #eed886; color: #eed886; background-color: #1a1508; }
    .decaf_green_light_roast { border: 0.5em solid #dce9dd; color: #dce9dd; background-color: #0d140e; }
    .decaf_orange_light_roast { border: 0.5em solid #f2e5b4; color: #f2e5b4; background-color: #1a1508; }
    table, th, td { padding: 0.1em 0em; margin-left: auto; margin-right: auto; }
    td.min { width: 1%; white-space: nowrap; }
    h1 { font-size: 3em; margin: 0em; }
    h2 { font-size: 1.75em; margin: 0.2em; }
    hr { border: none; height: 0.2em; background-color: ghostwhite; }
    .centered { text-align: center; }
    .highlighted { background-color: #3d3d00; color: yellow; }
    .outlined { display: inline-block; border-radius: 0.5em; border: 0.05em solid ghostwhite; padding: 0.2em 0.2em; }
    .object { border-radius: 1.5em; border: 0.1em solid ghostwhite; display: inline-block; padding: 0.4em 0.4em; }
    .incoming { border-radius: 3em 0.5em 0.5em 3em; border: 0.1em solid ghostwhite; display: inline-block; padding: 1em 1em; }
    .outgoing { border-radius: 0.5em 3em 3em 0.5em; border: 0.1em solid ghostwhite; display: inline-block; padding: 1em 1em; }
    .left_justified { float: left; }
    table.gridlines, table.gridlines th, table.gridlines td { padding: 0.4em 0.4em; border-collapse: collapse; border: 0.02em solid ghostwhite; }
    label { cursor: pointer; }
</style>
"#;

const CLASSIC_CSS: &str = r#"<style>
    html { font-family: sans-serif; }
    [class*='lvl-'] { display: none; cursor: auto; }
    input:checked~[class*='lvl-'] { display: block; }
    .gone { display: none; }
    .boolog { font-family: sans-serif; border-radius: 0.25em; border: 0.1em solid black; display: inline-block; background-image: linear-gradient(to bottom right, white, whitesmoke); }
    .failing_test_result { background-image: linear-gradient(to bottom right, mistyrose, salmon); }
    .inconclusive_test_result { background-image: linear-gradient(to bottom right, lemonchiffon, moccasin); }
    .passing_test_result { background-image: linear-gradient(to bottom right, honeydew, palegreen); }
    .implied_good { background-image: linear-gradient(to bottom right, mintcream, honeydew); }
    .implied_caution { background-image: linear-gradient(to bottom right, lemonchiffon, oldlace); }
    .implied_bad { background-image: linear-gradient(to bottom right, seashell, lavenderblush); }
    .neutral { background-image: linear-gradient(to bottom right, white, lightgrey); }
    .old_parchment { background-image: radial-gradient(lightgoldenrodyellow, cornsilk, wheat); }
    .plate { background-image: radial-gradient(ghostwhite, lightsteelblue); }
    .exception { background-image: linear-gradient(to bottom right, yellow, salmon); }
    .decaf_green { background-image: linear-gradient(to bottom right, #b0c6b2, #83a787); }
    .decaf_orange { background-image: linear-gradient(to bottom right, #eed886, #d0a403); }
    .decaf_green_light_roast { background-image: linear-gradient(to bottom right, #dce9dd, #b0c6b2); }
    .decaf_orange_light_roast { background-image: linear-gradient(to bottom right, #f2e5b4, #eed886); }
    table, th, td { padding: 0.1em 0em; margin-left: auto; margin-right: auto; }
    td.min { width: 1%; white-space: nowrap; }
    h1 { font-size: 3em; margin: 0em; }
    h2 { font-size: 1.75em; margin: 0.2em; }
    hr { border: none; height: 0.3em; background-color: black; }
    .centered { text-align: center; }
    .highlighted { background-image: linear-gradient(to bottom right, yellow, gold); }
    .outlined { display: inline-block; border-radius: 0.5em; border: 0.05em solid black; padding: 0.2em 0.2em; }
    .object { border-radius: 1.5em; border: 0.3em solid black; display: inline-block; padding: 0.4em 0.4em; }
    .incoming { border-radius: 3em 0.5em 0.5em 3em; border: 0.3em solid black; display: inline-block; padding: 1em 1em; }
    .outgoing { border-radius: 0.5em 3em 3em 0.5em; border: 0.3em solid black; display: inline-block; padding: 1em 1em; }
    .left_justified { float: left; }
    table.gridlines, table.gridlines th, table.gridlines td { padding: 0.4em 0.4em; border-collapse: collapse; border: 0.02em solid black; }
    label { cursor: pointer; }
</style>
"#;

const LIGHT_FLAT_CSS: &str = r#"<style>
    html { font-family: sans-serif; }
    body { background-color: #ffffff; color: #000000; }
    [class*='lvl-'] { display: none; cursor: auto; }
    input:checked~[class*='lvl-'] { display: block; }
    .gone { display: none; }
    .boolog { font-family: sans-serif; border-radius: 0.25em; display: inline-block; background-color: #dfdfdf; }
    .failing_test_result { background-color: #e55451; }
    .inconclusive_test_result { background-color: #ffffc2; }
    .passing_test_result { background-color: #c3fdb8; }
    .implied_good { background-color: #a0d6b4; }
    .implied_caution { background-color: #ffffc2; }
    .implied_bad { background-color: #fa8072; }
    .neutral { background-color: #dbe9fa; }
    .old_parchment { background-color: #ffe5b4; }
    .plate { background-color: #b0cfde; }
    .exception { background-color: #ff4500; }
    .decaf_green { background-color: #b0c6b2; }
    .decaf_orange { background-color: #eed886; }
    .decaf_green_light_roast { background-color: #dce9dd; }
    .decaf_orange_light_roast { background-color: #f2e5b4; }
    table, th, td { padding: 0.1em 0em; margin-left: auto; margin-right: auto; }
    td.min { width: 1%; white-space: nowrap; }
    h1 { font-size: 3em; margin: 0em; }
    h2 { font-size: 1.75em; margin: 0.2em; }
    hr { border: none; height: 0.3em; background-color: #000000; }
    .centered { text-align: center; }
    .highlighted { background-color: #ffc600; color: #000000; }
    .outlined { display: inline-block; border-radius: 0.5em; padding: 0.2em 0.2em; }
    .object { border-radius: 1.5em; display: inline-block; padding: 0.4em 0.4em; }
    .incoming { border-radius: 3em 0.5em 0.5em 3em; display: inline-block; padding: 1em 1em; }
    .outgoing { border-radius: 0.5em 3em 3em 0.5em; display: inline-block; padding: 1em 1em; }
    .left_justified { float: left; }
    table.gridlines, table.gridlines th, table.gridlines td { padding: 0.4em 0.4em; border-collapse: collapse; border: 0.02em solid black; color: #000000; }
    label { cursor: pointer; }
</style>
"#;

const DARK_FLAT_CSS: &str = r#"<style>
    html { font-family: sans-serif; }
    body { background-color: #0d0000; color: #f3c331; }
    [class*='lvl-'] { display: none; cursor: auto; }
    input:checked~[class*='lvl-'] { display: block; }
    .gone { display: none; }
    .boolog { font-family: sans-serif; border-radius: 0.25em; display: inline-block; background-color: #2e1a47; color: #f3c331; }
    .failing_test_result { background-color: #970005; color: #000000; }
    .inconclusive_test_result { background-color: #8a7839; color: #000000; }
    .passing_test_result { background-color: #007122; color: #000000; }
    .implied_good { background-color: #a0d6b4; color: #000000; }
    .implied_caution { background-color: #ede7c1; color: #000000; }
    .implied_bad { background-color: #fa8072; color: #000000; }
    .neutral { background-color: #893aa0; color: #000000; }
    .old_parchment { background-color: #8e844c; color: #000000; }
    .plate { background-color: #909dfd; color: #000000; }
    .exception { background-color: #c11b17; color: #000000; }
    .decaf_green { background-color: #83a787; color: #000000; }
    .decaf_orange { background-color: #d0a403; color: #000000; }
    .decaf_green_light_roast { background-color: #b0c6b2; color: #000000; }
    .decaf_orange_light_roast { background-color: #eed886; color: #000000; }
    table, th, td { padding: 0.1em 0em; margin-left: auto; margin-right: auto; }
    td.min { width: 1%; white-space: nowrap; }
    h1 { font-size: 3em; margin: 0em; }
    h2 { font-size: 1.75em; margin: 0.2em; }
    hr { border: none; height: 0.3em; background-color: #f3c331; }
    .centered { text-align: center; }
    .highlighted { background-color: #f3c331; color: #000000; }
    .outlined { display: inline-block; border-radius: 0.5em; padding: 0.2em 0.2em; }
    .object { border-radius: 1.5em; display: inline-block; padding: 0.4em 0.4em; }
    .incoming { border-radius: 3em 0.5em 0.5em 3em; display: inline-block; padding: 1em 1em; }
    .outgoing { border-radius: 0.5em 3em 3em 0.5em; display: inline-block; padding: 1em 1em; }
    .left_justified { float: left; }
    table.gridlines, table.gridlines th, table.gridlines td { padding: 0.4em 0.4em; border-collapse: collapse; border: 0.02em solid black; color: #000000; }
    label { cursor: pointer; }
</style>
"#;

const DARK_GRADIENT_CSS: &str = r#"<style>
    html { font-family: sans-serif; }
    body { background-color: #3a3b3c; color: #ffffff; }
    [class*='lvl-'] { display: none; cursor: auto; }
    input:checked~[class*='lvl-'] { display: block; }
    .gone { display: none; }
    .boolog { font-family: sans-serif; border-radius: 0.25em; border: 0.1em solid black; display: inline-block; background-image: linear-gradient(to bottom right, #3a3b3c, #34282c); }
    .failing_test_result { background-image: linear-gradient(to bottom right, #800000, #2b1b17); }
    .inconclusive_test_result { background-image: linear-gradient(to bottom right, #af9b60, #493d26); }
    .passing_test_result { background-image: linear-gradient(to bottom right, #4e9258, #228b22); }
    .implied_good { background-image: linear-gradient(to bottom right, #228b22, #254117); }
    .implied_caution { background-image: linear-gradient(to bottom right, #af9b60, #966f33); }
    .implied_bad { background-image: linear-gradient(to bottom right, #b21807, #660000); }
    .neutral { background-image: linear-gradient(to bottom right, #4d4d4f, #040720); }
    .old_parchment { background-image: radial-gradient(#e6bf83, #c8ad7f, #c19a6b); }
    .plate { background-image: radial-gradient(#838996, #2b3856); }
    .exception { background-image: linear-gradient(to bottom right, #e8a317, #660000); }
    .decaf_green { background-image: linear-gradient(to bottom right, #83a787, #2e4430); }
    .decaf_orange { background-image: linear-gradient(to bottom right, #d0a403, #4a3b01); }
    .decaf_green_light_roast { background-image: linear-gradient(to bottom right, #b0c6b2, #83a787); }
    .decaf_orange_light_roast { background-image: linear-gradient(to bottom right, #eed886, #d0a403); }
    table, th, td { padding: 0.1em 0em; margin-left: auto; margin-right: auto; }
    td.min { width: 1%; white-space: nowrap; }
    h1 { font-size: 3em; margin: 0em; }
    h2 { font-size: 1.75em; margin: 0.2em; }
    hr { border: none; height: 0.3em; background-color: #ffffff; }
    .centered { text-align: center; }
    .highlighted { background-image: linear-gradient(to bottom right, #e8a317, #ca762b); }
    .outlined { display: inline-block; border-radius: 0.5em; border: 0.05em solid black; padding: 0.2em 0.2em; }
    .object { border-radius: 1.5em; border: 0.3em solid black; display: inline-block; padding: 0.4em 0.4em; }
    .incoming { border-radius: 3em 0.5em 0.5em 3em; border: 0.3em solid black; display: inline-block; padding: 1em 1em; }
    .outgoing { border-radius: 0.5em 3em 3em 0.5em; border: 0.3em solid black; display: inline-block; padding: 1em 1em; }
    .left_justified { float: left; }
    table.gridlines, table.gridlines th, table.gridlines td { padding: 0.4em 0.4em; border-collapse: collapse; border: 0.02em solid black; }
    label { cursor: pointer; }
</style>
"#;
