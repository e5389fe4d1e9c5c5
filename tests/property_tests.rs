//! Property-based tests for the guarantees the encoders make across inputs.
//!
//! The batched encoder must agree with the one-scalar-at-a-time encoder, and
//! bare symbols must come out exactly as they went in.

use ion_text::{
    render_chars, render_code_points, render_symbol, render_symbol_with, symbol_variant,
    CharSequence, Context, FmtSink, SymbolVariant, Utf16Sink,
};
use proptest::prelude::*;

const CONTEXTS: [Context; 5] = [
    Context::ShortString,
    Context::LongString,
    Context::Symbol,
    Context::Clob,
    Context::Json,
];

fn batched(text: &str, context: Context, escape_unicode: bool) -> String {
    let mut out = String::new();
    let mut sink = if escape_unicode {
        FmtSink::ascii(&mut out)
    } else {
        FmtSink::unicode(&mut out)
    };
    text.render_body(&mut sink, context).unwrap();
    out
}

fn scalar(text: &str, context: Context, escape_unicode: bool) -> String {
    let mut out = String::new();
    let mut sink = if escape_unicode {
        FmtSink::ascii(&mut out)
    } else {
        FmtSink::unicode(&mut out)
    };
    render_chars(&mut sink, text, context).unwrap();
    out
}

fn sink_for(escape_unicode: bool) -> Utf16Sink {
    if escape_unicode {
        Utf16Sink::ascii()
    } else {
        Utf16Sink::new()
    }
}

fn render_bare(text: &str, quote_operators: bool) -> String {
    let mut out = String::new();
    render_symbol_with(&mut FmtSink::ascii(&mut out), Some(text), quote_operators).unwrap();
    out
}

proptest! {
    #[test]
    fn prop_batched_matches_scalar(text in any::<String>(), escape_unicode in any::<bool>()) {
        for context in CONTEXTS {
            prop_assert_eq!(
                batched(&text, context, escape_unicode),
                scalar(&text, context, escape_unicode),
                "context {:?}", context
            );
        }
    }

    #[test]
    fn prop_batched_matches_scalar_utf16(text in any::<String>(), escape_unicode in any::<bool>()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        for context in CONTEXTS {
            let mut fast = sink_for(escape_unicode);
            units.as_slice().render_body(&mut fast, context).unwrap();

            let mut slow = sink_for(escape_unicode);
            render_code_points(&mut slow, &units, context).unwrap();

            prop_assert_eq!(fast.as_units(), slow.as_units(), "context {:?}", context);
        }
    }

    #[test]
    fn prop_utf16_and_utf8_agree(text in any::<String>()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        for context in CONTEXTS {
            let mut wide = String::new();
            units.as_slice().render_body(&mut FmtSink::ascii(&mut wide), context).unwrap();
            prop_assert_eq!(&wide, &batched(&text, context, true));
        }
    }

    #[test]
    fn prop_ascii_sink_output_is_ascii(text in any::<String>()) {
        for context in CONTEXTS {
            prop_assert!(batched(&text, context, true).is_ascii());
        }
    }

    #[test]
    fn prop_identifiers_render_verbatim(text in "[a-zA-Z_$][a-zA-Z0-9_$]{0,12}") {
        if symbol_variant(text.as_str()).unwrap() == SymbolVariant::Identifier {
            prop_assert_eq!(render_bare(&text, true), text);
        }
    }

    #[test]
    fn prop_operators_render_verbatim_when_allowed(text in "[<>=+\\-*&^%~/?.;!|@`#]{1,8}") {
        prop_assert_eq!(symbol_variant(text.as_str()).unwrap(), SymbolVariant::Operator);
        prop_assert_eq!(render_bare(&text, false), text.clone());
        prop_assert_eq!(render_bare(&text, true), format!("'{text}'"));
    }

    #[test]
    fn prop_symbol_classification_round_trip(text in "[ -~]{1,12}") {
        let mut out = String::new();
        render_symbol(&mut FmtSink::ascii(&mut out), Some(text.as_str())).unwrap();
        match symbol_variant(text.as_str()).unwrap() {
            SymbolVariant::Identifier => prop_assert_eq!(out, text),
            SymbolVariant::Operator | SymbolVariant::Quoted => {
                prop_assert!(out.starts_with('\'') && out.ends_with('\''));
                prop_assert!(out.len() >= text.len() + 2);
            }
        }
    }
}
