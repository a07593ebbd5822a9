// ── Configuration ──

pub const ERR_SUMMONER_ZERO: &str = "summoner cannot be 0";
pub const ERR_PERIOD_DURATION_ZERO: &str = "period duration cannot be 0";
pub const ERR_VOTING_PERIOD_ZERO: &str = "voting period length cannot be 0";
pub const ERR_VOTING_PERIOD_LIMIT: &str = "voting period length exceeds limit";
pub const ERR_GRACE_PERIOD_LIMIT: &str = "grace period length exceeds limit";
pub const ERR_EMERGENCY_WAIT_ZERO: &str = "emergency exit wait cannot be 0";
pub const ERR_EMERGENCY_WAIT_LIMIT: &str = "emergency exit wait exceeds limit";
pub const ERR_DILUTION_BOUND_ZERO: &str = "dilution bound cannot be 0";
pub const ERR_DILUTION_BOUND_LIMIT: &str = "dilution bound exceeds limit";
pub const ERR_NO_APPROVED_TOKENS: &str = "need at least one approved token";
pub const ERR_INVALID_TOKEN: &str = "invalid token identifier";
pub const ERR_DUPLICATE_TOKEN: &str = "duplicate approved token";
pub const ERR_DEPOSIT_BELOW_REWARD: &str =
    "proposal deposit cannot be smaller than processing reward";

// ── Authorization ──

pub const ERR_NOT_MEMBER: &str = "not a member";
pub const ERR_NOT_DELEGATE: &str = "not a delegate";
pub const ERR_ONLY_PROPOSER_CAN_CANCEL: &str = "solely the proposer can cancel";

// ── Payments ──

pub const ERR_UNEXPECTED_PAYMENT: &str = "unexpected payment";
pub const ERR_PAYMENT_MISMATCH: &str = "payment does not match declared token and amount";

// ── Proposals ──

pub const ERR_APPLICANT_ZERO: &str = "applicant cannot be 0";
pub const ERR_TRIBUTE_NOT_WHITELISTED: &str = "tribute token is not whitelisted";
pub const ERR_PAYMENT_NOT_WHITELISTED: &str = "payment token is not whitelisted";
pub const ERR_ALREADY_WHITELISTED: &str = "token already whitelisted";
pub const ERR_KICK_NO_SHARES: &str = "member must have at least one share";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "proposal does not exist";
pub const ERR_ALREADY_SPONSORED: &str = "proposal has already been sponsored";
pub const ERR_CANCELLED: &str = "proposal has been cancelled";
pub const ERR_ALREADY_PROPOSED_TO_WHITELIST: &str = "already proposed to whitelist";
pub const ERR_ALREADY_PROPOSED_TO_KICK: &str = "already proposed to kick";
pub const ERR_TOO_MANY_SHARES: &str = "too many shares requested";

// ── Voting ──

pub const ERR_INDEX_OUT_OF_RANGE: &str = "proposal index out of range";
pub const ERR_VOTING_NOT_STARTED: &str = "voting period has not started";
pub const ERR_VOTING_EXPIRED: &str = "voting period has expired";
pub const ERR_ALREADY_VOTED: &str = "member has already voted";
pub const ERR_INVALID_VOTE: &str = "vote must be either Yes or No";
pub const ERR_MEMBER_NOT_FOUND: &str = "member does not exist";

// ── Delegate keys ──

pub const ERR_DELEGATE_ZERO: &str = "new delegate key cannot be 0";
pub const ERR_OVERWRITE_MEMBER: &str = "cannot overwrite existing members";
pub const ERR_OVERWRITE_DELEGATE: &str = "cannot overwrite existing delegate keys";

// ── Processing ──

pub const ERR_NOT_READY: &str = "proposal is not ready to be processed";
pub const ERR_ALREADY_PROCESSED: &str = "proposal has already been processed";
pub const ERR_PREVIOUS_NOT_PROCESSED: &str = "previous proposal must be processed";

// ── Ragequit ──

pub const ERR_INSUFFICIENT_SHARES: &str = "insufficient shares";
pub const ERR_CANNOT_RAGEQUIT: &str = "cannot ragequit until highest index proposal member voted YES on is processed";
pub const ERR_TOKEN_NOT_WHITELISTED: &str = "token must be whitelisted";
pub const ERR_TOKEN_LIST_NOT_ASCENDING: &str = "token list must be unique and in ascending order";

// ── Guild bank ──

pub const ERR_NO_SHARES_OUTSTANDING: &str = "total shares cannot be 0";
pub const ERR_GUILD_BANK_INSUFFICIENT: &str = "insufficient guild bank balance";

// ── Arithmetic ──

pub const ERR_PERIOD_OVERFLOW: &str = "period arithmetic overflow";
pub const ERR_ESCROW_UNDERFLOW: &str = "escrow balance underflow";
