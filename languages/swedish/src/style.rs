pub const CAMBRIDGE_CSS: &str = r#"
<style>
    span.pos {
        text-transform: lowercase;
        font-size: 0.9em;
        margin-right: 5px;
        padding: 2px 6px;
        color: white;
        background-color: #0d47a1;
        border-radius: 3px;
        font-weight: normal;
    }
    span.tran {
        margin: 0;
        padding: 0;
    }
    span.eng_tran {
        margin-right: 3px;
        padding: 0;
        color: #1565C0;
        line-height: 1.4;
    }
    span.frequency {
        font-size: 0.8em;
        color: #FF6F00;
        margin-left: 5px;
    }
    ul.sents {
        font-size: 0.85em;
        list-style: none;
        margin: 8px 0 5px 0;
        padding: 8px 12px;
        background: rgba(13, 71, 161, 0.08);
        border-radius: 5px;
        border-left: 3px solid #1976D2;
    }
    li.sent {
        margin: 3px 0;
        padding: 0;
        line-height: 1.3;
    }
    li.sent:before {
        content: "▸ ";
        color: #1976D2;
        font-weight: bold;
        margin-right: 5px;
    }
    span.eng_sent {
        margin-right: 5px;
        font-style: italic;
    }
    b {
        font-weight: bold;
        color: #0D47A1;
        background-color: rgba(13, 71, 161, 0.1);
        padding: 1px 2px;
        border-radius: 2px;
    }
</style>"#;

pub const TYDA_CSS: &str = r#"
<style>
    span.pos  {text-transform:lowercase; font-size:0.9em; margin-right:5px; padding:2px 4px; color:white; background-color:#2196F3; border-radius:3px;}
    span.tran {margin:0; padding:0;}
    span.eng_tran {margin-right:3px; padding:0; color:#1976D2;}
    ul.sents {font-size:0.8em; list-style:square inside; margin:3px 0;padding:5px;background:rgba(33,150,243,0.1); border-radius:5px;}
    li.sent  {margin:0; padding:0;}
    span.eng_sent {margin-right:5px;}
    b {font-weight: bold; color:#1565C0;}
</style>"#;

pub const GLOSBE_CSS: &str = concat!(
    "<style>",
    "span.tran {margin:0; padding:0; font-size:1em;}",
    "span.eng_tran {margin-right:3px; padding:0; color:#1565c0; font-size:1em;}",
    "ul.sents {font-size:1em; list-style:none; margin:8px 0; padding:8px; background:rgba(46,125,50,0.1); border-radius:5px;}",
    "li.sent {margin:0 0 8px 0; padding:0; line-height:1.4;}",
    "span.sv_sent {color:#2e7d32; font-weight:500;}",
    "span.eng_sent {color:#1565c0; font-style:italic;}",
    "</style>",
);
