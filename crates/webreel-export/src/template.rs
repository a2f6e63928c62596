//! HTML skeleton for the exported timeline

/// Placeholder slots are substituted by `render_timeline_html`; the
/// document carries its own styles and player, nothing external.
pub const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<style>__STYLES__</style>
</head>
<body>
<header>
  <h1>__TITLE__</h1>
  <p class="summary">__SUMMARY__</p>
</header>
<main>
  <section id="video-section">__VIDEO_SECTION__</section>
  <section id="player">
    <div id="controls">
      <button id="playBtn" type="button">Play</button>
      <button id="speedBtn" type="button">1&times;</button>
      <span id="clock"></span>
    </div>
    <div id="scrubber">
      <div id="scrubberFill"></div>
      <div id="scrubberHandle"></div>
    </div>
    <div id="track"></div>
  </section>
  <section id="detail">
    <p class="hint">Select an event pill to inspect its payload.</p>
  </section>
</main>
<script id="session-data" type="application/json">__SESSION_DATA__</script>
<script>__PLAYER_JS__</script>
</body>
</html>
"##;
