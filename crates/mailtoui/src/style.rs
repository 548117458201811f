//! Stylesheet injection

use mailtoui_dom::ElementSpec;

use crate::template::suffix;
use crate::{Options, UiHost};

/// Token replaced by the configured link class
const PREFIX_TOKEN: &str = "mailtoui";

const STYLESHEET: &str = r#"
.mailtoui-modal {
    height: 100%;
    margin: 0;
    padding: 0;
    width: 100%;
    background-color: rgb(0,0,0);
    background-color: rgba(0,0,0,0.4);
    color: #303131;
    display: none;
    position: fixed;
    top: 0;
    right: 0;
    bottom: 0;
    left: 0;
    z-index: 1000;
}
.mailtoui-modal-content {
    background-color: #F1F5F8;
    border-radius: 8px;
    box-shadow: 0 4px 8px 0 rgba(0,0,0,0.2),0 6px 20px 0 rgba(0,0,0,0.19);
    padding: 0;
    max-height: calc(100% - 100px);
    top: 50%;
    left: 50%;
    right: -45%;
    bottom: auto;
    animation: mailtoui-appear 0.4s;
    transform: translate(-50%, -50%);
    position: fixed;
    overflow: hidden;
    overflow-y: auto;
}
@media only screen and (min-width : 768px) {
    .mailtoui-modal-content {
        right: auto;
    }
}
.mailtoui-modal-head {
    background-color: #fff;
    clear: both;
    padding: 20px;
}
.mailtoui-modal-title {
    font-size: 100%;
    font-weight: bold;
    margin: 0;
    padding: 0;
}
.mailtoui-modal-close {
    color: #aaa;
    float: right;
    font-size: 38px;
    font-weight: bold;
    position: relative;
    top: -12px;
}
.mailtoui-modal-close:hover,
.mailtoui-modal-close:focus {
    color: black;
    cursor: pointer;
    text-decoration: none;
}
.mailtoui-modal-body {
    height: 100%;
    padding: 20px;
}
.mailtoui-client {
    color: #333;
    outline: none;
    text-decoration: none;
}
.mailtoui-client:focus .mailtoui-label {
    background-color: #555;
    color: #fff;
}
.mailtoui-label {
    box-shadow: 0px 2px 4px rgba(0,0,0,0.18);
    background-color: #fff;
    border-radius: 100px;
    margin-bottom: 20px;
    padding: 20px 30px;
}
.mailtoui-label:hover {
    background-color: #555;
    color: #fff;
}
.mailtoui-client:last-child .mailtoui-label {
    margin-bottom: 0;
}
.mailtoui-label-icon {
    position: relative;
    font-weight: bold;
    top: -2px;
}
.mailtoui-label-text {
    margin-left: 5px;
}
.mailtoui-copy {
    margin-top: 20px;
    position: relative;
}
.mailtoui-copy-button {
    box-shadow: 0px 2px 4px rgba(0,0,0,0.18);
    background-color: #fff;
    border-radius: 100px;
    border: none;
    color: #303131;
    font-size: 100%;
    outline: none;
    position: absolute;
    top: 0;
    left: 0;
    height: 63px;
    width: 100px;
}
.mailtoui-copy-button:hover,
.mailtoui-copy-button:focus {
    background-color: #555;
    color: #fff;
    cursor: pointer;
    outline: none;
}
.mailtoui-copy-email-address {
    background-color: #d8dcdf;
    color: #48494a;
    border-radius: 100px;
    border: none;
    box-sizing: border-box;
    font-size: 100%;
    padding: 20px 30px 20px 120px;
    width: 100%;
}
@keyframes mailtoui-appear {
    0% {
        transform: translate(-50%, -50%) scale(0,0);
        opacity: 0;
    }
    100% {
        transform: translate(-50%, -50%) scale(1,1);
        opacity: 1;
    }
}
"#;

/// Widget CSS namespaced by `prefix`
pub fn stylesheet(prefix: &str) -> String {
    STYLESHEET.replace(PREFIX_TOKEN, prefix)
}

/// Insert the stylesheet as the first child of <head>, once per page
pub fn embed_stylesheet<H: UiHost>(host: &mut H, options: &Options) -> H::Node {
    let id = options.prefix(suffix::STYLE);
    if let Some(existing) = host.element_by_id(&id) {
        return existing;
    }
    let spec = ElementSpec::new("style")
        .id(&id)
        .attr("type", "text/css")
        .text(&stylesheet(&options.link_class));
    let head = host.head();
    let first = host.first_element_child(head);
    let node = host.mount(head, first, &spec);
    tracing::debug!("Embedded stylesheet {}", id);
    node
}
