//! Embedded timeline playback engine
//!
//! Dependency-free script shipped inside the exported document. When a
//! media element is present its native clock is authoritative, so the
//! video and the event list can never drift apart; otherwise a virtual
//! clock advances by wall-clock delta times the speed multiplier.

pub const PLAYER_JS: &str = r##"
(function () {
  "use strict";

  var data = JSON.parse(document.getElementById("session-data").textContent);
  var events = data.events || [];
  var duration = data.durationMs || 0;
  var SPEEDS = [0.5, 1, 2, 4, 10];

  var state = {
    currentTimeMs: 0,
    playing: false,
    speedIndex: 1,
    selectedEventIndex: -1,
    cursor: -1
  };

  var video = document.getElementById("sessionVideo");
  var playBtn = document.getElementById("playBtn");
  var speedBtn = document.getElementById("speedBtn");
  var clockEl = document.getElementById("clock");
  var scrubber = document.getElementById("scrubber");
  var fill = document.getElementById("scrubberFill");
  var handle = document.getElementById("scrubberHandle");
  var track = document.getElementById("track");
  var detail = document.getElementById("detail");

  function fmtTime(ms) {
    ms = Math.max(0, Math.round(ms));
    var s = Math.floor(ms / 1000);
    var m = Math.floor(s / 60);
    return m + ":" + String(s % 60).padStart(2, "0") + "." + String(ms % 1000).padStart(3, "0");
  }

  var pills = [];
  events.forEach(function (event, index) {
    var pill = document.createElement("div");
    pill.className = "pill " + event.kind;
    var pct = duration > 0 ? (event.relativeTimeMs / duration) * 100 : 0;
    pill.style.left = pct + "%";
    pill.title = event.kind + " at " + fmtTime(event.relativeTimeMs);
    pill.addEventListener("click", function () { selectEvent(index); });
    track.appendChild(pill);
    pills.push(pill);
  });

  // Current event = last event with relativeTimeMs <= clock (floor
  // lookup). Forward motion advances the cursor incrementally; a
  // backward move rescans from the front.
  function rescanCursor(t) {
    var i = -1;
    while (i + 1 < events.length && events[i + 1].relativeTimeMs <= t) i++;
    state.cursor = i;
  }

  function advanceCursor(t) {
    while (state.cursor + 1 < events.length && events[state.cursor + 1].relativeTimeMs <= t) {
      state.cursor++;
    }
  }

  function setTime(t) {
    t = Math.max(0, Math.min(t, duration));
    if (t < state.currentTimeMs) rescanCursor(t); else advanceCursor(t);
    state.currentTimeMs = t;
  }

  function seek(t) {
    if (video) {
      video.currentTime = Math.max(0, t - data.videoOffsetMs) / 1000;
    }
    setTime(t);
    render();
  }

  var lastFrame = null;
  function frame(now) {
    if (video) {
      state.playing = !video.paused && !video.ended;
      setTime(video.currentTime * 1000 + data.videoOffsetMs);
    } else if (state.playing) {
      var delta = lastFrame === null ? 0 : now - lastFrame;
      var t = state.currentTimeMs + delta * SPEEDS[state.speedIndex];
      if (t >= duration) {
        t = duration;
        state.playing = false;
      }
      setTime(t);
    }
    lastFrame = now;
    render();
    requestAnimationFrame(frame);
  }

  function render() {
    var pct = duration > 0 ? (state.currentTimeMs / duration) * 100 : 0;
    fill.style.width = pct + "%";
    handle.style.left = pct + "%";
    clockEl.textContent = fmtTime(state.currentTimeMs) + " / " + fmtTime(duration);
    playBtn.textContent = state.playing ? "Pause" : "Play";
    speedBtn.textContent = SPEEDS[state.speedIndex] + "×";
    pills.forEach(function (pill, index) {
      pill.classList.toggle("current", index === state.cursor);
      pill.classList.toggle("selected", index === state.selectedEventIndex);
    });
  }

  playBtn.addEventListener("click", function () {
    if (video) {
      if (video.paused) video.play(); else video.pause();
      return;
    }
    if (!state.playing && state.currentTimeMs >= duration) seek(0);
    state.playing = !state.playing;
  });

  speedBtn.addEventListener("click", function () {
    state.speedIndex = (state.speedIndex + 1) % SPEEDS.length;
    if (video) video.playbackRate = SPEEDS[state.speedIndex];
    render();
  });

  function timeFromPointer(evt) {
    var rect = scrubber.getBoundingClientRect();
    var frac = (evt.clientX - rect.left) / rect.width;
    return Math.max(0, Math.min(1, frac)) * duration;
  }

  scrubber.addEventListener("mousedown", function (evt) {
    seek(timeFromPointer(evt));
    function move(e) { seek(timeFromPointer(e)); }
    function up() {
      document.removeEventListener("mousemove", move);
      document.removeEventListener("mouseup", up);
    }
    document.addEventListener("mousemove", move);
    document.addEventListener("mouseup", up);
  });

  // Selecting a pill is independent of the clock position: the detail
  // panel shows that one event's full payload, nested structures as
  // definition lists rather than one opaque blob.
  function selectEvent(index) {
    state.selectedEventIndex = index;
    var event = events[index];
    detail.innerHTML = "";
    var badge = document.createElement("span");
    badge.className = "kind-badge " + event.kind;
    badge.textContent = event.kind;
    var heading = document.createElement("p");
    heading.appendChild(badge);
    heading.appendChild(document.createTextNode(" at " + fmtTime(event.relativeTimeMs)));
    detail.appendChild(heading);
    detail.appendChild(renderValue(event.payload));
    render();
  }

  function renderValue(value) {
    if (value === null || typeof value !== "object") {
      var span = document.createElement("span");
      span.textContent = String(value);
      return span;
    }
    var dl = document.createElement("dl");
    var entries = Array.isArray(value)
      ? value.map(function (v, i) { return [String(i), v]; })
      : Object.keys(value).map(function (k) { return [k, value[k]]; });
    entries.forEach(function (pair) {
      var dt = document.createElement("dt");
      dt.textContent = pair[0];
      var dd = document.createElement("dd");
      dd.appendChild(renderValue(pair[1]));
      dl.appendChild(dt);
      dl.appendChild(dd);
    });
    return dl;
  }

  rescanCursor(0);
  render();
  requestAnimationFrame(frame);
})();
"##;
