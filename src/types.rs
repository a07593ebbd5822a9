multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Kind — the three shapes a proposal can take
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalKind {
    /// Requests shares and/or payment in exchange for tribute.
    Standard,
    /// Adds the token carried in `tribute_token` to the whitelist.
    Whitelist,
    /// Zeroes the shares of the member carried in `applicant`.
    GuildKick,
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

/// Voting and grace are not stored: they are derived from
/// `starting_period` and the current period.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Stored, tribute escrowed, not yet in the queue.
    Submitted,
    /// Withdrawn by its proposer before sponsorship. Terminal state.
    Cancelled,
    /// Admitted to the queue with a starting period.
    Sponsored,
    /// Processed and its effects applied. Terminal state.
    Passed,
    /// Processed without effects, tribute returned. Terminal state.
    Failed,
    /// Processed past the emergency exit wait. Tribute stays in escrow.
    EmergencyFailed,
}

impl ProposalStatus {
    pub fn is_processed(self) -> bool {
        matches!(
            self,
            ProposalStatus::Passed | ProposalStatus::Failed | ProposalStatus::EmergencyFailed
        )
    }
}

// ============================================================
// Vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Vote {
    /// Default for members who have not voted. Cannot be cast.
    Null,
    Yes,
    No,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub kind: ProposalKind,
    /// Receiver of shares and payment, or the member to kick
    pub applicant: ManagedAddress<M>,
    pub proposer: ManagedAddress<M>,
    /// Member behind the delegate key that sponsored (zero until sponsored)
    pub sponsor: ManagedAddress<M>,
    pub shares_requested: BigUint<M>,
    pub tribute_offered: BigUint<M>,
    pub tribute_token: TokenIdentifier<M>,
    pub payment_requested: BigUint<M>,
    pub payment_token: TokenIdentifier<M>,
    pub starting_period: u64,
    pub yes_votes: BigUint<M>,
    pub no_votes: BigUint<M>,
    /// Largest total share supply observed at any Yes vote
    pub max_total_shares_at_yes_vote: BigUint<M>,
    pub status: ProposalStatus,
    pub details: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    /// A freshly submitted proposal with all amounts at zero.
    pub fn new(
        kind: ProposalKind,
        proposer: ManagedAddress<M>,
        applicant: ManagedAddress<M>,
        tribute_token: TokenIdentifier<M>,
        payment_token: TokenIdentifier<M>,
        details: ManagedBuffer<M>,
    ) -> Self {
        Proposal {
            kind,
            applicant,
            proposer,
            sponsor: ManagedAddress::zero(),
            shares_requested: BigUint::zero(),
            tribute_offered: BigUint::zero(),
            tribute_token,
            payment_requested: BigUint::zero(),
            payment_token,
            starting_period: 0,
            yes_votes: BigUint::zero(),
            no_votes: BigUint::zero(),
            max_total_shares_at_yes_vote: BigUint::zero(),
            status: ProposalStatus::Submitted,
            details,
        }
    }
}

// ============================================================
// Member — share ledger entry
// ============================================================

/// Never removed once created. A member with zero shares keeps its
/// record so that delegate-key collisions are still detected.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Member<M: ManagedTypeApi> {
    pub delegate_key: ManagedAddress<M>,
    pub shares: BigUint<M>,
    /// Highest queue index this member voted Yes on, if any
    pub highest_index_yes_vote: Option<u64>,
}

// ============================================================
// Guild Config — fixed at summoning
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GuildConfig<M: ManagedTypeApi> {
    pub summoning_time: u64,
    /// Seconds per period
    pub period_duration: u64,
    /// Periods
    pub voting_period_length: u64,
    /// Periods
    pub grace_period_length: u64,
    /// Periods after the grace period before processing is forced to fail
    pub emergency_exit_wait: u64,
    pub deposit_token: TokenIdentifier<M>,
    pub proposal_deposit: BigUint<M>,
    pub processing_reward: BigUint<M>,
    pub dilution_bound: u64,
}

impl<M: ManagedTypeApi> GuildConfig<M> {
    pub fn period_at(&self, timestamp: u64) -> u64 {
        timestamp.saturating_sub(self.summoning_time) / self.period_duration
    }

    /// First period in which votes are no longer accepted.
    pub fn voting_period_end(&self, starting_period: u64) -> Option<u64> {
        starting_period.checked_add(self.voting_period_length)
    }

    /// First period in which the proposal may be processed.
    pub fn grace_period_end(&self, starting_period: u64) -> Option<u64> {
        self.voting_period_end(starting_period)?
            .checked_add(self.grace_period_length)
    }

    /// First period in which processing is forced to fail.
    pub fn emergency_period(&self, starting_period: u64) -> Option<u64> {
        self.grace_period_end(starting_period)?
            .checked_add(self.emergency_exit_wait)
    }
}
