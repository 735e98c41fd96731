use failfast_core::{ArgSource, MessageTemplate, Rule, TemplateArgs};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn every_rule_has_a_valid_default_template() {
    for rule in Rule::ALL {
        MessageTemplate::for_rule(rule)
            .unwrap_or_else(|err| panic!("rule {rule} has an invalid template: {err}"));
    }
}

#[test]
fn rule_ids_match_serde_names() {
    for rule in Rule::ALL {
        let json = serde_json::to_string(&rule).expect("serialize");
        assert_eq!(json, format!("\"{}\"", rule.id()));
        assert_eq!(rule.id().parse::<Rule>().expect("parse"), rule);
    }
    assert_eq!("bogus".parse::<Rule>().expect_err("unknown").code(), "rule.unknown");
}

#[test]
fn renders_selected_arguments_in_order() {
    let template = MessageTemplate::for_rule(Rule::Equals).expect("template");
    let failer = strings(&["transfer", "amount", "limit"]);
    let checker = strings(&["transfer", "10", "10"]);
    let args = TemplateArgs {
        failer: &failer,
        checker: &checker,
        extra: &[],
    };
    assert_eq!(
        template.render(&args).expect("render"),
        "transfer: Value 'amount'(10) is equal to value 'limit'(10)."
    );
}

#[test]
fn escaped_braces_render_literally() {
    let template = MessageTemplate::parse("{{{}}} in {}", "cu1, cx0").expect("parse");
    assert_eq!(template.selectors()[1].source, ArgSource::Extra);
    let checker = strings(&["c", "x"]);
    let extra = strings(&["set"]);
    let args = TemplateArgs {
        failer: &[],
        checker: &checker,
        extra: &extra,
    };
    assert_eq!(template.render(&args).expect("render"), "{x} in set");
}

#[test]
fn rejects_malformed_templates() {
    let arity = MessageTemplate::parse("{} and {}", "fu0").expect_err("arity");
    assert_eq!(arity.code(), "template.arity");
    let selector = MessageTemplate::parse("{}", "zz0").expect_err("selector");
    assert_eq!(selector.code(), "template.selector");
    let brace = MessageTemplate::parse("open { brace", "").expect_err("brace");
    assert_eq!(brace.code(), "template.format");
}

#[test]
fn missing_argument_is_reported() {
    let template = MessageTemplate::parse("{}", "cx4").expect("parse");
    let args = TemplateArgs {
        failer: &[],
        checker: &[],
        extra: &[],
    };
    let err = template.render(&args).expect_err("missing");
    assert_eq!(err.code(), "template.argument_missing");
}
