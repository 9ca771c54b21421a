use apidoc_md::api::{load_http_service_json, load_service_json, load_service_yaml};
use apidoc_md::ast::ServiceInfo;
use apidoc_md::obsolete::ServiceElementWithAttributes;
use apidoc_md::settings::GeneratorSettings;
use apidoc_md::{
    is_event, render_field_type, render_field_type_as_json_value, status_code_phrase,
    where_not_obsolete, Globals,
};

const WIDGET_API: &str = r#"{
    "name": "WidgetApi",
    "summary": "Manages widgets.",
    "methods": [
        {
            "name": "getWidget",
            "request_fields": [ { "name": "id", "type": "string" } ],
            "response_fields": [ { "name": "widget", "type": "Widget" } ]
        },
        { "name": "widgetChanged", "kind": "event" },
        {
            "name": "deleteWidget",
            "attributes": [
                {
                    "name": "obsolete",
                    "parameters": [ { "name": "message", "value": "Use removeWidget." } ]
                }
            ]
        }
    ],
    "dtos": [
        {
            "name": "Widget",
            "fields": [
                { "name": "legacyId", "type": "int32", "attributes": [ { "name": "obsolete" } ] },
                { "name": "id", "type": "string" },
                { "name": "kind", "type": "WidgetKind" },
                { "name": "children", "type": "Widget[]" },
                { "name": "tags", "type": "map<nullable<string>>" },
                { "name": "price", "type": "Money" },
                { "name": "lookup", "type": "result<WidgetKind>" }
            ]
        }
    ],
    "enums": [
        {
            "name": "WidgetKind",
            "values": [
                { "name": "small" },
                { "name": "medium" },
                { "name": "large" },
                { "name": "huge" }
            ]
        }
    ],
    "external_dtos": [ { "name": "Money" } ]
}"#;

const WIDGET_HTTP: &str = r#"{
    "url": "https://api.example.com/v1",
    "methods": [
        {
            "service_method": { "name": "getWidget" },
            "verb": "GET",
            "path": "/widgets/{id}",
            "path_fields": [
                { "service_field": { "name": "id", "type": "string" }, "name": "id" }
            ],
            "responses": [ { "status_code": 200 }, { "status_code": 404 } ]
        },
        {
            "service_method": { "name": "widgetChanged", "kind": "event" },
            "verb": "POST",
            "path": "/widgets/changes"
        }
    ]
}"#;

fn widget_api() -> ServiceInfo {
    load_service_json(WIDGET_API).unwrap()
}

#[test]
fn test_render_widget_fields() {
    let service = widget_api();
    let globals = Globals::new(&GeneratorSettings::default(), &service, None);
    let widget = service.find_dto("Widget").unwrap();

    let rows: Vec<(String, String, String)> = where_not_obsolete(&widget.fields)
        .map(|field| {
            let field_type = globals.get_field_type(field).unwrap();
            (
                field.name.clone(),
                render_field_type(&field_type),
                render_field_type_as_json_value(&field_type),
            )
        })
        .collect();

    let expected = [
        ("id", "string", "\"(string)\""),
        ("kind", "[WidgetKind](WidgetKind.md)", "\"(small|medium|large|...)\""),
        ("children", "[Widget](Widget.md)[]", "[ { \"id\": ... }, ... ]"),
        ("tags", "map<nullable<string>>", "{ \"...\": \"(string)\" | null, ... }"),
        ("price", "Money", "(Money)"),
        (
            "lookup",
            "result<[WidgetKind](WidgetKind.md)>",
            "{ \"value\": \"(small|medium|large|...)\" | \"error\": { \"code\": ... } }",
        ),
    ];
    assert_eq!(rows.len(), expected.len());
    for (row, (name, reference, example)) in rows.iter().zip(expected) {
        assert_eq!(row.0, name);
        assert_eq!(row.1, reference);
        assert_eq!(row.2, example);
    }
}

#[test]
fn test_obsolete_method_message() {
    let service = widget_api();
    let method = service.find_method("deleteWidget").unwrap();
    assert_eq!(method.obsolete_message(), Some("Use removeWidget."));

    let visible: Vec<&str> = where_not_obsolete(&service.methods)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(visible, vec!["getWidget", "widgetChanged"]);
}

#[test]
fn test_is_event() {
    let service = widget_api();
    let http = load_http_service_json(WIDGET_HTTP).unwrap();
    let globals = Globals::new(&GeneratorSettings::default(), &service, Some(&http));

    let get_widget = service.find_method("getWidget").unwrap();
    let widget_changed = service.find_method("widgetChanged").unwrap();
    assert!(!is_event(get_widget));
    assert!(is_event(widget_changed));

    let bound_get = globals.get_http(get_widget).unwrap();
    let bound_changed = globals.get_http(widget_changed).unwrap();
    assert!(!globals.is_event(bound_get));
    assert!(globals.is_event(bound_changed));

    assert!(!is_event(&42_u32));
    assert!(!is_event(&service));
}

#[test]
fn test_http_responses_phrases() {
    let service = widget_api();
    let http = load_http_service_json(WIDGET_HTTP).unwrap();
    let globals = Globals::new(&GeneratorSettings::default(), &service, Some(&http));

    let get_widget = globals.get_http(service.find_method("getWidget").unwrap()).unwrap();
    assert_eq!(get_widget.verb, "GET");
    assert_eq!(get_widget.path_fields[0].name, "id");

    let phrases: Vec<&str> = get_widget
        .responses
        .iter()
        .map(|r| status_code_phrase(r.status_code))
        .collect();
    assert_eq!(phrases, vec!["OK", "Not Found"]);
}

#[test]
fn test_status_code_phrase_table() {
    let table = [
        (100, "Continue"),
        (101, "Switching Protocols"),
        (200, "OK"),
        (201, "Created"),
        (202, "Accepted"),
        (203, "Non-Authoritative Information"),
        (204, "No Content"),
        (205, "Reset Content"),
        (206, "Partial Content"),
        (300, "Multiple Choices"),
        (301, "Moved Permanently"),
        (302, "Found"),
        (303, "See Other"),
        (304, "Not Modified"),
        (305, "Use Proxy"),
        (307, "Temporary Redirect"),
        (400, "Bad Request"),
        (401, "Unauthorized"),
        (402, "Payment Required"),
        (403, "Forbidden"),
        (404, "Not Found"),
        (405, "Method Not Allowed"),
        (406, "Not Acceptable"),
        (407, "Proxy Authentication Required"),
        (408, "Request Timeout"),
        (409, "Conflict"),
        (410, "Gone"),
        (411, "Length Required"),
        (412, "Precondition Failed"),
        (413, "Request Entity Too Large"),
        (414, "Request-Uri Too Long"),
        (415, "Unsupported Media Type"),
        (416, "Requested Range Not Satisfiable"),
        (417, "Expectation Failed"),
        (426, "Upgrade Required"),
        (500, "Internal Server Error"),
        (501, "Not Implemented"),
        (502, "Bad Gateway"),
        (503, "Service Unavailable"),
        (504, "Gateway Timeout"),
        (505, "Http Version Not Supported"),
    ];
    for (code, phrase) in table {
        assert_eq!(status_code_phrase(code), phrase, "status {code}");
    }

    let known = (0..=u16::MAX).filter(|code| !status_code_phrase(*code).is_empty()).count();
    assert_eq!(known, table.len());
    assert_eq!(status_code_phrase(999), "");
}

#[test]
fn test_load_service_yaml() {
    let source = r"
name: TinyApi
dtos:
  - name: Point
    fields:
      - name: x
        type: double
      - name: y
        type: double
";
    let service = load_service_yaml(source).unwrap();
    let point = service.find_dto("Point").unwrap();
    let x = service.get_field_type(&point.fields[0]).unwrap();
    assert_eq!(x.to_string(), "double");
    assert_eq!(
        render_field_type_as_json_value(&apidoc_md::ast::ServiceTypeInfo::Dto(point)),
        r#"{ "x": ... }"#
    );
}

#[test]
fn test_render_from_threads() {
    let service = widget_api();
    let widget = service.find_dto("Widget").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    widget
                        .fields
                        .iter()
                        .map(|f| render_field_type(&service.get_field_type(f).unwrap()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    });
}
