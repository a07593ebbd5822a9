#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod guild_bank;
pub mod types;

use errors::*;
use types::{GuildConfig, Member, Proposal, ProposalKind, ProposalStatus, Vote};

// ============================================================
// Constants
// ============================================================

/// Upper bound for voting period, grace period and emergency wait, in periods
const MAX_PERIOD_LENGTH: u64 = 1_000_000_000_000_000_000;

const MAX_DILUTION_BOUND: u64 = 1_000_000_000_000_000_000;

/// Ceiling on total shares plus all shares reserved by queued proposals
const MAX_NUMBER_OF_SHARES: u64 = 1_000_000_000_000_000_000;

const SUMMONER_SHARES: u64 = 1;

/// Scratch buffer for comparing token identifiers byte-wise. ESDT ids take at
/// most 17 bytes (10 ticker + dash + 6 random); the buffer leaves headroom.
const MAX_TOKEN_ID_LEN: usize = 32;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MolochGuild: guild_bank::GuildBankModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        summoner: ManagedAddress,
        period_duration: u64,
        voting_period_length: u64,
        grace_period_length: u64,
        emergency_exit_wait: u64,
        proposal_deposit: BigUint,
        dilution_bound: u64,
        processing_reward: BigUint,
        tokens: MultiValueEncoded<TokenIdentifier>,
    ) {
        require!(!summoner.is_zero(), ERR_SUMMONER_ZERO);
        require!(period_duration > 0, ERR_PERIOD_DURATION_ZERO);
        require!(voting_period_length > 0, ERR_VOTING_PERIOD_ZERO);
        require!(
            voting_period_length <= MAX_PERIOD_LENGTH,
            ERR_VOTING_PERIOD_LIMIT
        );
        require!(
            grace_period_length <= MAX_PERIOD_LENGTH,
            ERR_GRACE_PERIOD_LIMIT
        );
        require!(emergency_exit_wait > 0, ERR_EMERGENCY_WAIT_ZERO);
        require!(
            emergency_exit_wait <= MAX_PERIOD_LENGTH,
            ERR_EMERGENCY_WAIT_LIMIT
        );
        require!(dilution_bound > 0, ERR_DILUTION_BOUND_ZERO);
        require!(
            dilution_bound <= MAX_DILUTION_BOUND,
            ERR_DILUTION_BOUND_LIMIT
        );
        require!(
            proposal_deposit >= processing_reward,
            ERR_DEPOSIT_BELOW_REWARD
        );

        // ── Whitelist: first entry doubles as the deposit token ──
        let mut deposit_token: Option<TokenIdentifier> = None;
        for token in tokens.into_iter() {
            require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
            require!(
                self.approved_tokens().insert(token.clone()),
                ERR_DUPLICATE_TOKEN
            );
            if deposit_token.is_none() {
                deposit_token = Some(token);
            }
        }
        let deposit_token = match deposit_token {
            Some(token) => token,
            None => sc_panic!(ERR_NO_APPROVED_TOKENS),
        };

        self.config().set(GuildConfig {
            summoning_time: self.blockchain().get_block_timestamp(),
            period_duration,
            voting_period_length,
            grace_period_length,
            emergency_exit_wait,
            deposit_token,
            proposal_deposit,
            processing_reward,
            dilution_bound,
        });

        let summoner_shares = BigUint::from(SUMMONER_SHARES);
        self.members(&summoner).set(Member {
            delegate_key: summoner.clone(),
            shares: summoner_shares.clone(),
            highest_index_yes_vote: None,
        });
        self.member_address_by_delegate_key(&summoner).set(&summoner);
        self.total_shares().set(&summoner_shares);

        self.summon_complete_event(&summoner, &summoner_shares);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitProposal
    // Anyone may submit. Tribute is escrowed until processing.
    // ========================================================

    #[payable("*")]
    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        applicant: ManagedAddress,
        shares_requested: BigUint,
        tribute_offered: BigUint,
        tribute_token: TokenIdentifier,
        payment_requested: BigUint,
        payment_token: TokenIdentifier,
        details: ManagedBuffer,
    ) -> u64 {
        require!(!applicant.is_zero(), ERR_APPLICANT_ZERO);
        require!(
            self.approved_tokens().contains(&tribute_token),
            ERR_TRIBUTE_NOT_WHITELISTED
        );
        require!(
            self.approved_tokens().contains(&payment_token),
            ERR_PAYMENT_NOT_WHITELISTED
        );

        self.receive_exact_payment(&tribute_token, &tribute_offered);
        self.escrow_balance(&tribute_token)
            .update(|balance| *balance += &tribute_offered);

        let mut proposal = Proposal::new(
            ProposalKind::Standard,
            self.blockchain().get_caller(),
            applicant,
            tribute_token,
            payment_token,
            details,
        );
        proposal.shares_requested = shares_requested;
        proposal.tribute_offered = tribute_offered;
        proposal.payment_requested = payment_requested;

        self.store_new_proposal(&proposal)
    }

    #[endpoint(submitWhitelistProposal)]
    fn submit_whitelist_proposal(&self, token: TokenIdentifier, details: ManagedBuffer) -> u64 {
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(
            !self.approved_tokens().contains(&token),
            ERR_ALREADY_WHITELISTED
        );

        let proposal = Proposal::new(
            ProposalKind::Whitelist,
            self.blockchain().get_caller(),
            ManagedAddress::zero(),
            token.clone(),
            token,
            details,
        );

        self.store_new_proposal(&proposal)
    }

    #[endpoint(submitGuildKickProposal)]
    fn submit_guild_kick_proposal(
        &self,
        member_to_kick: ManagedAddress,
        details: ManagedBuffer,
    ) -> u64 {
        let member_mapper = self.members(&member_to_kick);
        require!(
            !member_mapper.is_empty() && member_mapper.get().shares > 0u64,
            ERR_KICK_NO_SHARES
        );

        // Kicks move no funds; both token fields name the deposit token
        let deposit_token = self.config().get().deposit_token;
        let proposal = Proposal::new(
            ProposalKind::GuildKick,
            self.blockchain().get_caller(),
            member_to_kick,
            deposit_token.clone(),
            deposit_token,
            details,
        );

        self.store_new_proposal(&proposal)
    }

    // ========================================================
    // ENDPOINT: sponsorProposal
    // A delegate posts the deposit and admits the proposal to
    // the queue. Queue order fixes voting and processing order.
    // ========================================================

    #[payable("*")]
    #[endpoint(sponsorProposal)]
    fn sponsor_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let (member_address, _) = self.require_delegate(&caller);
        let config = self.config().get();

        self.receive_exact_payment(&config.deposit_token, &config.proposal_deposit);
        self.escrow_balance(&config.deposit_token)
            .update(|balance| *balance += &config.proposal_deposit);

        let mut proposal = self.require_proposal(proposal_id);
        require!(
            proposal.status != ProposalStatus::Cancelled,
            ERR_CANCELLED
        );
        require!(
            proposal.status == ProposalStatus::Submitted,
            ERR_ALREADY_SPONSORED
        );

        match proposal.kind {
            ProposalKind::Whitelist => {
                let token = &proposal.tribute_token;
                require!(
                    !self.approved_tokens().contains(token),
                    ERR_ALREADY_WHITELISTED
                );
                require!(
                    !self.proposed_to_whitelist(token).get(),
                    ERR_ALREADY_PROPOSED_TO_WHITELIST
                );
                self.proposed_to_whitelist(token).set(true);
            }
            ProposalKind::GuildKick => {
                require!(
                    !self.proposed_to_kick(&proposal.applicant).get(),
                    ERR_ALREADY_PROPOSED_TO_KICK
                );
                self.proposed_to_kick(&proposal.applicant).set(true);
            }
            ProposalKind::Standard => {
                // Reserve the supply now so queued proposals can never
                // jointly exceed the ceiling once they pass
                let mut requested = self.total_shares_requested().get();
                requested += &proposal.shares_requested;
                require!(
                    &self.total_shares().get() + &requested <= MAX_NUMBER_OF_SHARES,
                    ERR_TOO_MANY_SHARES
                );
                self.total_shares_requested().set(&requested);
            }
        }

        // ── Voting starts after both now and the queue tail ──
        let queue_len = self.proposal_queue().len();
        let tail_starting_period = if queue_len == 0 {
            0
        } else {
            let tail_id = self.proposal_queue().get(queue_len);
            self.proposals(tail_id).get().starting_period
        };
        let current_period = self.current_period(&config);
        let starting_period = self.checked_period(
            core::cmp::max(current_period, tail_starting_period).checked_add(1),
        );

        proposal.starting_period = starting_period;
        proposal.sponsor = member_address.clone();
        proposal.status = ProposalStatus::Sponsored;
        self.proposals(proposal_id).set(&proposal);
        self.proposal_queue().push(&proposal_id);

        let proposal_index = queue_len as u64;
        self.sponsor_proposal_event(
            &caller,
            &member_address,
            proposal_id,
            proposal_index,
            starting_period,
        );
    }

    // ========================================================
    // ENDPOINT: submitVote
    // One vote per member per proposal, cast by its delegate,
    // weighted by the member's shares at the time of voting.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, proposal_index: u64, vote: Vote) {
        let caller = self.blockchain().get_caller();
        let (member_address, mut member) = self.require_delegate(&caller);
        let proposal_id = self.queued_proposal_id(proposal_index);
        let mut proposal = self.proposals(proposal_id).get();
        let config = self.config().get();
        let current_period = self.current_period(&config);

        require!(
            current_period >= proposal.starting_period,
            ERR_VOTING_NOT_STARTED
        );
        require!(
            current_period < self.checked_period(config.voting_period_end(proposal.starting_period)),
            ERR_VOTING_EXPIRED
        );
        require!(
            self.votes_by_member(proposal_id, &member_address).is_empty(),
            ERR_ALREADY_VOTED
        );

        match vote {
            Vote::Yes => {
                proposal.yes_votes += &member.shares;

                // Ragequit stays blocked until this index is processed
                let raises_watermark = match member.highest_index_yes_vote {
                    Some(highest) => proposal_index > highest,
                    None => true,
                };
                if raises_watermark {
                    member.highest_index_yes_vote = Some(proposal_index);
                    self.members(&member_address).set(&member);
                }

                let total_shares = self.total_shares().get();
                if total_shares > proposal.max_total_shares_at_yes_vote {
                    proposal.max_total_shares_at_yes_vote = total_shares;
                }
            }
            Vote::No => {
                proposal.no_votes += &member.shares;
            }
            Vote::Null => sc_panic!(ERR_INVALID_VOTE),
        }

        self.votes_by_member(proposal_id, &member_address).set(vote);
        self.proposals(proposal_id).set(&proposal);

        self.submit_vote_event(proposal_index, &caller, &member_address, vote);
    }

    // ========================================================
    // ENDPOINT: processProposal
    // Anyone may process once the grace period is over. The
    // queue is processed strictly in order. Economic guards
    // downgrade the outcome to failed instead of aborting.
    // ========================================================

    #[endpoint(processProposal)]
    fn process_proposal(&self, proposal_index: u64) {
        let proposal_id = self.queued_proposal_id(proposal_index);
        let mut proposal = self.proposals(proposal_id).get();
        let config = self.config().get();
        let current_period = self.current_period(&config);

        require!(
            current_period >= self.checked_period(config.grace_period_end(proposal.starting_period)),
            ERR_NOT_READY
        );
        require!(!proposal.status.is_processed(), ERR_ALREADY_PROCESSED);
        if proposal_index > 0 {
            // VecMapper is 1-based: position `proposal_index` holds index - 1
            let previous_id = self.proposal_queue().get(proposal_index as usize);
            require!(
                self.proposals(previous_id).get().status.is_processed(),
                ERR_PREVIOUS_NOT_PROCESSED
            );
        }

        self.total_shares_requested()
            .update(|requested| *requested -= &proposal.shares_requested);

        // ── Outcome ──
        let mut did_pass = proposal.yes_votes > proposal.no_votes;

        let emergency = current_period
            >= self.checked_period(config.emergency_period(proposal.starting_period));
        if emergency {
            did_pass = false;
        }

        // Too many shares left since the last Yes vote
        let total_shares = self.total_shares().get();
        if &total_shares * config.dilution_bound < proposal.max_total_shares_at_yes_vote {
            did_pass = false;
        }

        if proposal.payment_requested > self.guild_bank_balance(&proposal.payment_token).get() {
            did_pass = false;
        }

        proposal.status = if did_pass {
            ProposalStatus::Passed
        } else if emergency {
            ProposalStatus::EmergencyFailed
        } else {
            ProposalStatus::Failed
        };
        self.proposals(proposal_id).set(&proposal);

        // ── Effects ──
        if did_pass {
            match proposal.kind {
                ProposalKind::Whitelist => {
                    self.approved_tokens().insert(proposal.tribute_token.clone());
                }
                ProposalKind::GuildKick => {
                    let shares = self.members(&proposal.applicant).get().shares;
                    let tokens = self.approved_token_list();
                    self.burn_shares(&proposal.applicant, &shares, &tokens);
                }
                ProposalKind::Standard => {
                    self.mint_shares(&proposal.applicant, &proposal.shares_requested);
                    self.take_from_escrow(&proposal.tribute_token, &proposal.tribute_offered);
                    self.deposit_to_guild_bank(&proposal.tribute_token, &proposal.tribute_offered);
                    self.pay_fixed(
                        &proposal.payment_token,
                        &proposal.applicant,
                        &proposal.payment_requested,
                    );
                }
            }
        } else if !emergency && proposal.kind == ProposalKind::Standard {
            // Tribute goes back to whoever paid it, not the applicant
            self.release_escrow(
                &proposal.tribute_token,
                &proposal.proposer,
                &proposal.tribute_offered,
            );
        }

        match proposal.kind {
            ProposalKind::Whitelist => self.proposed_to_whitelist(&proposal.tribute_token).clear(),
            ProposalKind::GuildKick => self.proposed_to_kick(&proposal.applicant).clear(),
            ProposalKind::Standard => {}
        }

        // ── Deposit: reward to the processor, remainder to the sponsor ──
        let caller = self.blockchain().get_caller();
        let sponsor_refund = &config.proposal_deposit - &config.processing_reward;
        self.release_escrow(&config.deposit_token, &caller, &config.processing_reward);
        self.release_escrow(&config.deposit_token, &proposal.sponsor, &sponsor_refund);

        self.process_proposal_event(proposal_index, proposal_id, did_pass, emergency, &proposal);
    }

    // ========================================================
    // ENDPOINT: ragequit / safeRagequit
    // Burn shares for a proportional slice of the guild bank.
    // ========================================================

    #[endpoint(ragequit)]
    fn ragequit(&self, shares_to_burn: BigUint) {
        let tokens = self.approved_token_list();
        self.ragequit_caller(&shares_to_burn, &tokens);
    }

    /// Pays out only the listed tokens. The list must be whitelisted
    /// and strictly ascending, which also rules out duplicates.
    #[endpoint(safeRagequit)]
    fn safe_ragequit(&self, shares_to_burn: BigUint, token_list: ManagedVec<TokenIdentifier>) {
        let mut previous: Option<TokenIdentifier> = None;
        for token in token_list.iter() {
            require!(
                self.approved_tokens().contains(&token),
                ERR_TOKEN_NOT_WHITELISTED
            );
            if let Some(previous) = &previous {
                require!(
                    token_id_precedes(previous, &*token),
                    ERR_TOKEN_LIST_NOT_ASCENDING
                );
            }
            previous = Some((*token).clone());
        }

        self.ragequit_caller(&shares_to_burn, &token_list);
    }

    // ========================================================
    // ENDPOINT: cancelProposal
    // Proposer withdraws an unsponsored proposal and its tribute.
    // ========================================================

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.proposer == caller, ERR_ONLY_PROPOSER_CAN_CANCEL);
        require!(
            proposal.status != ProposalStatus::Cancelled,
            ERR_CANCELLED
        );
        require!(
            proposal.status == ProposalStatus::Submitted,
            ERR_ALREADY_SPONSORED
        );

        proposal.status = ProposalStatus::Cancelled;
        self.proposals(proposal_id).set(&proposal);
        self.release_escrow(
            &proposal.tribute_token,
            &proposal.proposer,
            &proposal.tribute_offered,
        );

        self.cancel_proposal_event(proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINT: updateDelegateKey
    // ========================================================

    #[endpoint(updateDelegateKey)]
    fn update_delegate_key(&self, new_delegate_key: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let mut member = self.require_member(&caller);
        require!(!new_delegate_key.is_zero(), ERR_DELEGATE_ZERO);

        if new_delegate_key != caller {
            require!(
                self.members(&new_delegate_key).is_empty(),
                ERR_OVERWRITE_MEMBER
            );
            let key_mapper = self.member_address_by_delegate_key(&new_delegate_key);
            require!(
                key_mapper.is_empty() || key_mapper.get() == caller,
                ERR_OVERWRITE_DELEGATE
            );
        }

        self.member_address_by_delegate_key(&member.delegate_key)
            .clear();
        self.member_address_by_delegate_key(&new_delegate_key)
            .set(&caller);
        member.delegate_key = new_delegate_key.clone();
        self.members(&caller).set(&member);

        self.update_delegate_key_event(&caller, &new_delegate_key);
    }

    // ========================================================
    // INTERNAL: share ledger
    // ========================================================

    fn mint_shares(&self, applicant: &ManagedAddress, shares: &BigUint) {
        let member_mapper = self.members(applicant);
        if !member_mapper.is_empty() {
            member_mapper.update(|member| member.shares += shares);
        } else {
            // An existing member using the applicant's address as delegate
            // key gets it reset to their own address first
            let key_mapper = self.member_address_by_delegate_key(applicant);
            if !key_mapper.is_empty() {
                let member_to_override = key_mapper.get();
                self.members(&member_to_override)
                    .update(|member| member.delegate_key = member_to_override.clone());
                self.member_address_by_delegate_key(&member_to_override)
                    .set(&member_to_override);
            }

            member_mapper.set(Member {
                delegate_key: applicant.clone(),
                shares: shares.clone(),
                highest_index_yes_vote: None,
            });
            key_mapper.set(applicant);
        }

        self.total_shares().update(|total| *total += shares);
    }

    /// Burns against the pre-burn total, so the exiting member is paid
    /// at the share price immediately before their own exit.
    fn burn_shares(
        &self,
        member_address: &ManagedAddress,
        shares_to_burn: &BigUint,
        tokens: &ManagedVec<TokenIdentifier>,
    ) {
        let initial_total_shares = self.total_shares().get();

        self.members(member_address)
            .update(|member| member.shares -= shares_to_burn);
        self.total_shares()
            .set(&initial_total_shares - shares_to_burn);

        if *shares_to_burn > 0u64 {
            self.pay_proportional(member_address, shares_to_burn, &initial_total_shares, tokens);
        }

        self.ragequit_event(member_address, &initial_total_shares, shares_to_burn);
    }

    fn ragequit_caller(&self, shares_to_burn: &BigUint, tokens: &ManagedVec<TokenIdentifier>) {
        let caller = self.blockchain().get_caller();
        let member = self.require_member(&caller);
        require!(member.shares >= *shares_to_burn, ERR_INSUFFICIENT_SHARES);

        // An unprocessed Yes vote could still pass and dilute the guild
        if let Some(highest_index) = member.highest_index_yes_vote {
            require!(
                self.is_queue_index_processed(highest_index),
                ERR_CANNOT_RAGEQUIT
            );
        }

        self.burn_shares(&caller, shares_to_burn, tokens);
    }

    // ========================================================
    // INTERNAL: escrow and payments
    // ========================================================

    /// The attached payment must be exactly `amount` of `token`, or
    /// nothing at all when `amount` is zero.
    fn receive_exact_payment(&self, token: &TokenIdentifier, amount: &BigUint) {
        require!(
            self.call_value().egld_value().clone_value() == 0u64,
            ERR_UNEXPECTED_PAYMENT
        );

        let transfers = self.call_value().all_esdt_transfers();
        if *amount == 0u64 {
            require!(transfers.is_empty(), ERR_UNEXPECTED_PAYMENT);
            return;
        }

        require!(transfers.len() == 1, ERR_PAYMENT_MISMATCH);
        let payment = transfers.get(0);
        require!(
            payment.token_identifier == *token
                && payment.token_nonce == 0
                && payment.amount == *amount,
            ERR_PAYMENT_MISMATCH
        );
    }

    fn take_from_escrow(&self, token: &TokenIdentifier, amount: &BigUint) {
        let escrow_mapper = self.escrow_balance(token);
        require!(escrow_mapper.get() >= *amount, ERR_ESCROW_UNDERFLOW);
        escrow_mapper.update(|balance| *balance -= amount);
    }

    fn release_escrow(&self, token: &TokenIdentifier, receiver: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.take_from_escrow(token, amount);
        self.send().direct_esdt(receiver, token, 0, amount);
    }

    // ========================================================
    // INTERNAL: lookups and guards
    // ========================================================

    fn store_new_proposal(&self, proposal: &Proposal<Self::Api>) -> u64 {
        let proposal_id = self.proposal_count().get();
        self.proposals(proposal_id).set(proposal);
        self.proposal_count().set(proposal_id + 1);

        self.submit_proposal_event(proposal_id, &proposal.proposer, &proposal.applicant, proposal);

        proposal_id
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            proposal_id < self.proposal_count().get(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    fn require_member(&self, address: &ManagedAddress) -> Member<Self::Api> {
        let member_mapper = self.members(address);
        require!(!member_mapper.is_empty(), ERR_NOT_MEMBER);
        let member = member_mapper.get();
        require!(member.shares > 0u64, ERR_NOT_MEMBER);
        member
    }

    /// Resolves a delegate key to the member it votes for.
    fn require_delegate(
        &self,
        delegate_key: &ManagedAddress,
    ) -> (ManagedAddress, Member<Self::Api>) {
        let key_mapper = self.member_address_by_delegate_key(delegate_key);
        require!(!key_mapper.is_empty(), ERR_NOT_DELEGATE);
        let member_address = key_mapper.get();
        let member = self.members(&member_address).get();
        require!(member.shares > 0u64, ERR_NOT_DELEGATE);
        (member_address, member)
    }

    fn queued_proposal_id(&self, proposal_index: u64) -> u64 {
        require!(
            proposal_index < self.proposal_queue().len() as u64,
            ERR_INDEX_OUT_OF_RANGE
        );
        self.proposal_queue().get(proposal_index as usize + 1)
    }

    fn is_queue_index_processed(&self, proposal_index: u64) -> bool {
        let proposal_id = self.queued_proposal_id(proposal_index);
        self.proposals(proposal_id).get().status.is_processed()
    }

    fn approved_token_list(&self) -> ManagedVec<TokenIdentifier> {
        let mut tokens = ManagedVec::new();
        for token in self.approved_tokens().iter() {
            tokens.push(token);
        }
        tokens
    }

    fn current_period(&self, config: &GuildConfig<Self::Api>) -> u64 {
        config.period_at(self.blockchain().get_block_timestamp())
    }

    fn checked_period(&self, period: Option<u64>) -> u64 {
        match period {
            Some(period) => period,
            None => sc_panic!(ERR_PERIOD_OVERFLOW),
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getCurrentPeriod)]
    fn get_current_period(&self) -> u64 {
        let config = self.config().get();
        self.current_period(&config)
    }

    #[view(getProposalQueueLength)]
    fn get_proposal_queue_length(&self) -> u64 {
        self.proposal_queue().len() as u64
    }

    #[view(getProposalIdByIndex)]
    fn get_proposal_id_by_index(&self, proposal_index: u64) -> u64 {
        self.queued_proposal_id(proposal_index)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> Member<Self::Api> {
        let member_mapper = self.members(&address);
        require!(!member_mapper.is_empty(), ERR_MEMBER_NOT_FOUND);
        member_mapper.get()
    }

    #[view(getMemberProposalVote)]
    fn get_member_proposal_vote(
        &self,
        member_address: ManagedAddress,
        proposal_index: u64,
    ) -> Vote {
        require!(
            !self.members(&member_address).is_empty(),
            ERR_MEMBER_NOT_FOUND
        );
        let proposal_id = self.queued_proposal_id(proposal_index);
        let vote_mapper = self.votes_by_member(proposal_id, &member_address);
        if vote_mapper.is_empty() {
            Vote::Null
        } else {
            vote_mapper.get()
        }
    }

    #[view(canRagequit)]
    fn can_ragequit(&self, highest_index_yes_vote: u64) -> bool {
        self.is_queue_index_processed(highest_index_yes_vote)
    }

    #[view(getApprovedTokens)]
    fn get_approved_tokens(&self) -> MultiValueEncoded<TokenIdentifier> {
        let mut result = MultiValueEncoded::new();
        for token in self.approved_tokens().iter() {
            result.push(token);
        }
        result
    }

    #[view(isTokenWhitelisted)]
    fn is_token_whitelisted(&self, token: TokenIdentifier) -> bool {
        self.approved_tokens().contains(&token)
    }

    #[view(isProposedToWhitelist)]
    fn is_proposed_to_whitelist(&self, token: TokenIdentifier) -> bool {
        self.proposed_to_whitelist(&token).get()
    }

    #[view(isProposedToKick)]
    fn is_proposed_to_kick(&self, member_address: ManagedAddress) -> bool {
        self.proposed_to_kick(&member_address).get()
    }

    #[view(getEscrowBalance)]
    fn get_escrow_balance(&self, token: TokenIdentifier) -> BigUint {
        self.escrow_balance(&token).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("summonComplete")]
    fn summon_complete_event(&self, #[indexed] summoner: &ManagedAddress, shares: &BigUint);

    #[event("submitProposal")]
    fn submit_proposal_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] applicant: &ManagedAddress,
        proposal: &Proposal<Self::Api>,
    );

    #[event("sponsorProposal")]
    fn sponsor_proposal_event(
        &self,
        #[indexed] delegate_key: &ManagedAddress,
        #[indexed] member: &ManagedAddress,
        #[indexed] proposal_id: u64,
        #[indexed] proposal_index: u64,
        starting_period: u64,
    );

    #[event("submitVote")]
    fn submit_vote_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] delegate_key: &ManagedAddress,
        #[indexed] member: &ManagedAddress,
        vote: Vote,
    );

    #[event("processProposal")]
    fn process_proposal_event(
        &self,
        #[indexed] proposal_index: u64,
        #[indexed] proposal_id: u64,
        #[indexed] did_pass: bool,
        #[indexed] emergency: bool,
        proposal: &Proposal<Self::Api>,
    );

    #[event("ragequit")]
    fn ragequit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] initial_total_shares: &BigUint,
        shares_burned: &BigUint,
    );

    #[event("cancelProposal")]
    fn cancel_proposal_event(&self, #[indexed] proposal_id: u64, proposer: &ManagedAddress);

    #[event("updateDelegateKey")]
    fn update_delegate_key_event(
        &self,
        #[indexed] member: &ManagedAddress,
        new_delegate_key: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getConfig)]
    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<GuildConfig<Self::Api>>;

    // ── Share ledger ──

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalSharesRequested)]
    #[storage_mapper("totalSharesRequested")]
    fn total_shares_requested(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[view(getMemberAddressByDelegateKey)]
    #[storage_mapper("memberAddressByDelegateKey")]
    fn member_address_by_delegate_key(
        &self,
        delegate_key: &ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress>;

    // ── Whitelist ──

    #[storage_mapper("approvedTokens")]
    fn approved_tokens(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("proposedToWhitelist")]
    fn proposed_to_whitelist(&self, token: &TokenIdentifier) -> SingleValueMapper<bool>;

    #[storage_mapper("proposedToKick")]
    fn proposed_to_kick(&self, member: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Proposals ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalQueue")]
    fn proposal_queue(&self) -> VecMapper<u64>;

    #[storage_mapper("votesByMember")]
    fn votes_by_member(&self, proposal_id: u64, member: &ManagedAddress) -> SingleValueMapper<Vote>;

    // ── Escrow ──

    #[storage_mapper("escrowBalance")]
    fn escrow_balance(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;
}

/// Byte-wise ordering of token identifiers.
fn token_id_precedes<M: ManagedTypeApi>(
    left: &TokenIdentifier<M>,
    right: &TokenIdentifier<M>,
) -> bool {
    let mut left_buffer = [0u8; MAX_TOKEN_ID_LEN];
    let mut right_buffer = [0u8; MAX_TOKEN_ID_LEN];
    let left_bytes = left.as_managed_buffer().load_to_byte_array(&mut left_buffer);
    let right_bytes = right.as_managed_buffer().load_to_byte_array(&mut right_buffer);
    left_bytes < right_bytes
}
