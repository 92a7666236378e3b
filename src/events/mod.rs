//! Ready-made [`EventSink`]s.

use tracing::info;

use crate::domain::{Event, TokenAddress};
use crate::traits::EventSink;

/// Recording sink that keeps every event in publication order.
///
/// # Examples
///
/// ```
/// use launchpad_amm::domain::{Event, TokenAddress};
/// use launchpad_amm::events::EventLog;
/// use launchpad_amm::traits::EventSink;
///
/// let mut log = EventLog::new();
/// log.emit(Event::SupportChanged { token: TokenAddress::zero(), supported: false });
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Events that concern `token`.
    pub fn for_token<'a>(&'a self, token: &'a TokenAddress) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| match e {
            Event::TokenCreated { token_address, .. } => token_address == token,
            Event::PoolCreated { token: t, .. }
            | Event::LiquidityAdded { token: t, .. }
            | Event::SwapExecuted { token: t, .. }
            | Event::SupportChanged { token: t, .. } => t == token,
        })
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Sink that only logs each event through `tracing` at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: Event) {
        match &event {
            Event::TokenCreated {
                token_id,
                token_address,
                owner,
                symbol,
                total_supply,
                ..
            } => info!(
                event = event.name(),
                %token_id, token = %token_address, %owner, symbol = symbol.as_str(), %total_supply
            ),
            Event::PoolCreated {
                token,
                token_amount,
                reserve_amount,
            }
            | Event::LiquidityAdded {
                token,
                token_amount,
                reserve_amount,
            } => info!(event = event.name(), %token, %token_amount, %reserve_amount),
            Event::SwapExecuted {
                user,
                token,
                input_amount,
                output_amount,
                direction,
                tx_ref,
            } => info!(
                event = event.name(),
                %user, %token, %input_amount, %output_amount, %direction, %tx_ref
            ),
            Event::SupportChanged { token, supported } => {
                info!(event = event.name(), %token, supported = *supported);
            }
        }
    }
}
