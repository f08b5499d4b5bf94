//! End-to-end runs of the pipeline over small versions of the upstream files.

use glyphdex_core::catalog::{PlainEnvelope, PythonModuleEnvelope};
use glyphdex_core::params::{CatalogParams, NameCase};
use glyphdex_core::source::{MarkerMatch, SectionWindow};
use glyphdex_core::{CatalogBuilder, CatalogError, SourceTexts, build_catalog};

const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
0023;NUMBER SIGN;Po;0;ET;;;;;N;;;;;
002B;PLUS SIGN;Sm;0;ES;;;;;N;;;;;
05D0;HEBREW LETTER ALEF;Lo;0;R;;;;;N;;;;;
261D;WHITE UP POINTING INDEX;So;0;ON;;;;;N;;;;;
2764;HEAVY BLACK HEART;So;0;ON;;;;;N;;;;;
1F466;BOY;So;0;ON;;;;;N;;;;;
1F600;GRINNING FACE;So;0;ON;;;;;N;;;;;
1F601;GRINNING FACE WITH SMILING EYES;So;0;ON;;;;;N;;;;;
";

const EMOJI_DATA: &str = "\
# emoji-data.txt
# Date: 2019-01-15, 09:10:05 GMT

# ================================================

0023          ; Emoji                # 1.1  [1] (#️)       number sign
2764          ; Emoji                # 1.1  [1] (❤️)       red heart
1F600..1F602  ; Emoji                # 6.1  [3] (😀..😂)    grinning face..face with tears of joy

# ================================================

# All omitted code points have Emoji_Modifier_Base=No \n\
261D          ; Emoji_Modifier_Base  # 1.1  [1] (☝️)       index pointing up
1F466         ; Emoji_Modifier_Base  # 6.0  [1] (👦)       boy

# Total elements: 120
";

const MATH_DATA: &str = "\
# MathClassEx-15.txt
002B;V;+;PLUS SIGN
05D0;A;\u{05D0};HEBREW LETTER ALEF
2764;N;\u{2764};HEAVY BLACK HEART
";

const ANNOTATIONS: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE ldml SYSTEM "../../common/dtd/ldml.dtd">
<ldml>
    <identity>
        <language type="en"/>
    </identity>
    <annotations>
        <annotation cp="+">add | plus</annotation>
        <annotation cp="+" type="tts">plus sign</annotation>
        <annotation cp="😀">face | grin</annotation>
        <annotation cp="😀" type="tts">grinning face</annotation>
    </annotations>
</ldml>
"#;

fn sources() -> SourceTexts<'static> {
    SourceTexts {
        unicode_data: UNICODE_DATA,
        emoji_data: EMOJI_DATA,
        math_data: MATH_DATA,
        annotations: ANNOTATIONS,
    }
}

#[test]
fn test_python_module_artifact() {
    let params = CatalogParams::default();
    let output = build_catalog(&sources(), &params).unwrap();
    let rendered = output.render_string(&PythonModuleEnvelope, &params).unwrap();
    insta::assert_snapshot!(rendered, @r##"
    emoji_list="""# number sign
    + plus sign <small>(add, plus)</small>
    א hebrew letter alef
    ☝ white up pointing index
    ❤ heavy black heart
    👦 boy
    😀 grinning face <small>(face, grin)</small>
    😁 grinning face with smiling eyes
    """

    skin_tone_selectable_emojis={'☝', '👦'}
    "##);
}

#[test]
fn test_plain_artifact() {
    let params = CatalogParams::default();
    let output = build_catalog(&sources(), &params).unwrap();
    let rendered = output.render_string(&PlainEnvelope, &params).unwrap();
    insta::assert_snapshot!(rendered, @r##"
    # number sign
    + plus sign <small>(add, plus)</small>
    א hebrew letter alef
    ☝ white up pointing index
    ❤ heavy black heart
    👦 boy
    😀 grinning face <small>(face, grin)</small>
    😁 grinning face with smiling eyes

    ☝ 👦
    "##);
}

#[test]
fn test_unnamed_emoji_dropped_but_skin_tones_kept() {
    let output = build_catalog(&sources(), &CatalogParams::default()).unwrap();
    assert!(output.catalog.get(0x1F602).is_none());
    assert!(output.catalog.get(0x0000).is_none());
    assert_eq!(output.catalog.len(), 8);
    assert!(output.skin_tones.contains(0x261D));
    assert!(output.skin_tones.contains(0x1F466));
    assert!(!output.skin_tones.contains(0x1F600));
}

#[test]
fn test_directional_marks() {
    let output = CatalogBuilder::new(sources())
        .directional_marks(true)
        .render(&PlainEnvelope)
        .unwrap();
    assert!(output.contains("\u{200E}\u{05D0} hebrew letter alef\n"));
    assert!(output.contains("\n\u{2764} heavy black heart\n"));
}

#[test]
fn test_title_case_names() {
    let output = CatalogBuilder::new(sources())
        .name_case(NameCase::Title)
        .build()
        .unwrap();
    assert_eq!(output.catalog.get(0x1F466).unwrap().name, "Boy");
    assert_eq!(
        output.catalog.get(0x1F601).unwrap().name,
        "Grinning Face With Smiling Eyes"
    );
}

#[test]
fn test_reformatted_marker_fails_fast() {
    let reformatted = EMOJI_DATA.replace("Emoji_Modifier_Base=No \n", "Emoji_Modifier_Base=No\n");
    let texts = SourceTexts {
        emoji_data: &reformatted,
        ..sources()
    };
    let err = build_catalog(&texts, &CatalogParams::default()).unwrap_err();
    assert!(matches!(err, CatalogError::MarkerNotFound { .. }));

    let tolerant = CatalogParams {
        human_window: SectionWindow::default().with_matching(MarkerMatch::Trimmed),
        ..CatalogParams::default()
    };
    let output = build_catalog(&texts, &tolerant).unwrap();
    assert_eq!(output.skin_tones.len(), 2);
}

#[test]
fn test_malformed_emoji_record_fails_fast() {
    let broken = EMOJI_DATA.replace("2764          ;", "27G4          ;");
    let texts = SourceTexts {
        emoji_data: &broken,
        ..sources()
    };
    let err = build_catalog(&texts, &CatalogParams::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "emoji-data.txt line 7: malformed code point field: \"27G4\""
    );
}

#[test]
fn test_broken_annotations_fail() {
    let texts = SourceTexts {
        annotations: "<ldml><annotations></ldml>",
        ..sources()
    };
    assert!(matches!(
        build_catalog(&texts, &CatalogParams::default()),
        Err(CatalogError::Annotations(_))
    ));
}

#[test]
fn test_params_from_json_drive_rendering() {
    let params = CatalogParams::from_json(r#"{"emphasis": {"open": "", "close": ""}}"#).unwrap();
    let output = CatalogBuilder::new(sources())
        .params(params)
        .render(&PlainEnvelope)
        .unwrap();
    assert!(output.contains("\n😀 grinning face (face, grin)\n"));
}
