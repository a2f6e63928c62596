//! Stylesheet shipped inside the exported document

pub const STYLES: &str = r##"
:root {
  --network: #3b82f6;
  --interaction: #22c55e;
  --snapshot: #f59e0b;
  --bg: #0f172a;
  --panel: #1e293b;
  --text: #e2e8f0;
  --muted: #94a3b8;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font: 14px/1.5 system-ui, sans-serif;
  background: var(--bg);
  color: var(--text);
}
header { padding: 16px 24px; border-bottom: 1px solid var(--panel); }
header h1 { margin: 0; font-size: 18px; }
.summary { color: var(--muted); margin: 4px 0 0; }
main { padding: 16px 24px; }
#video-section video { max-width: 100%; border-radius: 6px; background: #000; }
.video-placeholder, .video-note {
  color: var(--muted);
  background: var(--panel);
  padding: 12px;
  border-radius: 6px;
}
#player { margin-top: 16px; }
#controls { display: flex; align-items: center; gap: 8px; margin-bottom: 8px; }
#controls button {
  background: var(--panel);
  color: var(--text);
  border: 1px solid #334155;
  border-radius: 4px;
  padding: 6px 14px;
  cursor: pointer;
}
#clock { color: var(--muted); font-variant-numeric: tabular-nums; }
#scrubber {
  position: relative;
  height: 10px;
  background: var(--panel);
  border-radius: 5px;
  cursor: pointer;
}
#scrubberFill {
  position: absolute;
  left: 0; top: 0; bottom: 0;
  width: 0;
  background: #475569;
  border-radius: 5px;
}
#scrubberHandle {
  position: absolute;
  top: -3px;
  width: 16px; height: 16px;
  margin-left: -8px;
  background: var(--text);
  border-radius: 50%;
}
#track { position: relative; height: 72px; margin-top: 12px; }
.pill {
  position: absolute;
  width: 10px; height: 18px;
  margin-left: -5px;
  border-radius: 4px;
  cursor: pointer;
  opacity: 0.85;
}
.pill.network { top: 0; background: var(--network); }
.pill.interaction { top: 26px; background: var(--interaction); }
.pill.snapshot { top: 52px; background: var(--snapshot); }
.pill.current { outline: 2px solid var(--text); }
.pill.selected { outline: 2px solid #facc15; }
#detail {
  margin-top: 16px;
  background: var(--panel);
  border-radius: 6px;
  padding: 12px 16px;
  max-height: 320px;
  overflow: auto;
}
#detail .hint { color: var(--muted); }
#detail dl { margin: 0 0 0 12px; }
#detail dt { color: var(--muted); float: left; clear: left; margin-right: 8px; }
#detail dd { margin: 0 0 2px 0; overflow-wrap: anywhere; }
.kind-badge {
  display: inline-block;
  padding: 2px 8px;
  border-radius: 10px;
  font-size: 12px;
  color: #0f172a;
}
.kind-badge.network { background: var(--network); }
.kind-badge.interaction { background: var(--interaction); }
.kind-badge.snapshot { background: var(--snapshot); }
"##;
