//! Embedded HTML for the two built-in surfaces.
//!
//! The toolbar and settings pages ship inside the binary and load with
//! `load_html`; everything they do goes through the `window.ledge.ipc`
//! bridge.

/// The toolbar strip: pin toggle, page dots, refresh, settings, quit.
pub const TOOLBAR_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  html, body { margin: 0; height: 100%; background: rgba(24, 24, 28, 0.92); }
  #strip { display: flex; flex-direction: column; align-items: center;
           height: 100%; padding: 8px 0; box-sizing: border-box; gap: 10px; }
  button { width: 32px; height: 32px; border: none; border-radius: 8px;
           background: transparent; color: #ddd; font-size: 16px; cursor: pointer; }
  button:hover { background: rgba(255, 255, 255, 0.12); }
  button.active { background: rgba(110, 170, 255, 0.35); }
  #pages { display: flex; flex-direction: column; gap: 6px; margin-top: 4px; flex: 1; }
  .dot { width: 10px; height: 10px; border-radius: 50%;
         background: rgba(255, 255, 255, 0.25); cursor: pointer; }
  .dot.active { background: #6eaaff; }
</style>
</head>
<body>
<div id="strip">
  <button id="pin" title="Pin">&#9733;</button>
  <button id="refresh" title="Refresh">&#8635;</button>
  <div id="pages"></div>
  <button id="settings" title="Settings">&#9881;</button>
  <button id="quit" title="Quit">&#10005;</button>
</div>
<script>
  var ipc = window.ledge.ipc;
  document.getElementById('pin').onclick = function () { ipc.send('toggle-pin'); };
  document.getElementById('refresh').onclick = function () { ipc.send('refresh'); };
  document.getElementById('settings').onclick = function () { ipc.send('open-settings'); };
  document.getElementById('quit').onclick = function () { ipc.send('quit'); };

  ipc.on('pin-state', function (pinned) {
    document.getElementById('pin').classList.toggle('active', !!pinned);
  });

  ipc.on('pages', function (info) {
    var container = document.getElementById('pages');
    container.textContent = '';
    for (var i = 0; i < info.count; i++) {
      var dot = document.createElement('div');
      dot.className = 'dot' + (i === info.active ? ' active' : '');
      dot.onclick = (function (index) {
        return function () { ipc.send('switch-page', index); };
      })(i);
      container.appendChild(dot);
    }
  });

  ipc.send('get-pin');
</script>
</body>
</html>
"#;

/// The settings page: geometry, trigger distance, display choice, pages.
pub const SETTINGS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
  body { margin: 0; padding: 20px; background: #1b1b1f; color: #e8e8e8;
         font: 13px/1.5 system-ui, sans-serif; }
  h1 { font-size: 16px; margin: 0 0 16px; }
  label { display: block; margin: 12px 0 4px; color: #aaa; }
  input, select, textarea { width: 100%; box-sizing: border-box; padding: 6px 8px;
         background: #26262c; color: #e8e8e8; border: 1px solid #3a3a42;
         border-radius: 6px; }
  textarea { height: 140px; font-family: monospace; resize: vertical; }
  #save { margin-top: 18px; padding: 8px 20px; width: auto;
          background: #3d6fc4; border: none; cursor: pointer; }
  #save:hover { background: #4a7fd6; }
  .hint { color: #777; font-size: 11px; }
</style>
</head>
<body>
<h1>Ledge settings</h1>
<label>Width (% of work area)</label>
<input id="width" type="number" min="1" max="100">
<label>Height (% of work area)</label>
<input id="height" type="number" min="1" max="100">
<label>Trigger distance (px)</label>
<input id="trigger" type="number" min="1">
<label>Display</label>
<select id="display"></select>
<label>Pages (JSON)</label>
<textarea id="pages"></textarea>
<p class="hint">Each page: {"items": [{"url": "https://...", "width": 50}]}. Omit width for an equal split.</p>
<button id="save">Save</button>
<script>
  var ipc = window.ledge.ipc;

  ipc.on('load-config', function (config) {
    document.getElementById('width').value = config.width;
    document.getElementById('height').value = config.height;
    document.getElementById('trigger').value = config.triggerDistance;
    document.getElementById('pages').value = JSON.stringify(config.pages, null, 2);
  });

  ipc.on('load-displays', function (displays) {
    var select = document.getElementById('display');
    select.textContent = '';
    var primary = document.createElement('option');
    primary.value = 'primary';
    primary.textContent = 'Primary display';
    select.appendChild(primary);
    displays.forEach(function (d) {
      var option = document.createElement('option');
      option.value = d.id;
      option.textContent = d.label;
      option.selected = !!d.selected;
      select.appendChild(option);
    });
  });

  document.getElementById('save').onclick = function () {
    var pages;
    try {
      pages = JSON.parse(document.getElementById('pages').value);
    } catch (e) {
      alert('Pages is not valid JSON: ' + e.message);
      return;
    }
    ipc.send('save-config', {
      width: Number(document.getElementById('width').value),
      height: Number(document.getElementById('height').value),
      triggerDistance: Number(document.getElementById('trigger').value),
      displayId: document.getElementById('display').value,
      pages: pages
    });
  };

  ipc.send('get-config');
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_wires_every_command() {
        for kind in ["toggle-pin", "refresh", "open-settings", "quit", "switch-page"] {
            assert!(TOOLBAR_HTML.contains(kind), "toolbar must send {kind}");
        }
        assert!(TOOLBAR_HTML.contains("window.ledge.ipc"));
    }

    #[test]
    fn settings_round_trips_config_fields() {
        for field in ["width", "height", "triggerDistance", "displayId", "pages"] {
            assert!(SETTINGS_HTML.contains(field), "settings must handle {field}");
        }
        assert!(SETTINGS_HTML.contains("save-config"));
        assert!(SETTINGS_HTML.contains("get-config"));
    }

    #[test]
    fn pages_avoid_inner_html() {
        // User-influenced strings go through textContent/createElement only.
        assert!(!TOOLBAR_HTML.contains(".innerHTML"));
        assert!(!SETTINGS_HTML.contains(".innerHTML"));
    }
}
