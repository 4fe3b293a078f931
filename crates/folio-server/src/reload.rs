//! WebSocket-based preview reload.
//!
//! The preview pane subscribes once; every accepted wizard mutation (or
//! on-disk edit in dev mode) broadcasts a reload so the pane always shows the
//! current aggregate.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to preview clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Full page reload
    Reload,

    /// Connection established
    Connected,
}

/// Hub for broadcasting reload messages to all connected preview clients.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    /// Create a new reload hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: ReloadMessage) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(msg);
    }

    /// Subscribe to reload messages.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the client-side reload script served at `/__reload.js`.
pub fn reload_client_script(ws_url: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const ws = new WebSocket('{}');
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  ws.onopen = function() {{
    console.log('[folio] Preview connected');
    reconnectAttempts = 0;
  }};

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);

    switch (msg.type) {{
      case 'reload':
        location.reload();
        break;

      case 'connected':
        console.log('[folio] Server acknowledged connection');
        break;
    }}
  }};

  ws.onclose = function() {{
    console.log('[folio] Preview disconnected');
    if (reconnectAttempts < maxReconnectAttempts) {{
      reconnectAttempts++;
      setTimeout(function() {{
        location.reload();
      }}, 1000 * reconnectAttempts);
    }}
  }};

  ws.onerror = function(e) {{
    console.error('[folio] WebSocket error:', e);
  }};
}})();
"#,
        ws_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        hub.send(ReloadMessage::Reload);

        match rx.try_recv() {
            Ok(ReloadMessage::Reload) => {}
            _ => panic!("Expected Reload message"),
        }
    }

    #[test]
    fn serializes_messages() {
        let json = serde_json::to_string(&ReloadMessage::Reload).unwrap();

        assert!(json.contains("reload"));
    }

    #[test]
    fn client_script_targets_the_given_url() {
        let script = reload_client_script("ws://127.0.0.1:4100/__reload");

        assert!(script.contains("ws://127.0.0.1:4100/__reload"));
        assert!(script.contains("location.reload()"));
    }
}
