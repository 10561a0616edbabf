multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_APPROVED, ERR_QUORUM_NOT_MET, ERR_SELF_APPROVAL, ERR_TARGET_NOT_PARTICIPANT,
};
use crate::events;
use crate::storage;

#[multiversx_sc::module]
pub trait ApprovalModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: approveWithdrawal
    // One approval per peer per withdrawal cycle of the target.
    // ========================================================

    #[endpoint(approveWithdrawal)]
    fn approve_withdrawal(&self, target: ManagedAddress) {
        self.require_active();
        let caller = self.blockchain().get_caller();
        self.require_participant(&caller);

        require!(self.participants().contains(&target), ERR_TARGET_NOT_PARTICIPANT);
        require!(caller != target, ERR_SELF_APPROVAL);

        let cycle = self.withdrawal_cycle(&target).get();
        let inserted = self.approvers(&target, cycle).insert(caller.clone());
        require!(inserted, ERR_ALREADY_APPROVED);

        let approval_count = self.approvers(&target, cycle).len() as u64;
        let now = self.blockchain().get_block_timestamp();
        self.withdrawal_approved_event(&target, &caller, cycle, now, approval_count);
    }

    // ========================================================
    // INTERNAL: quorum
    // ========================================================

    /// Every other participant must approve.
    fn required_approvals(&self) -> u64 {
        self.total_participants().saturating_sub(1)
    }

    fn approval_count(&self, target: &ManagedAddress) -> u64 {
        let cycle = self.withdrawal_cycle(target).get();
        self.approvers(target, cycle).len() as u64
    }

    fn require_quorum(&self, target: &ManagedAddress) {
        require!(
            self.approval_count(target) >= self.required_approvals(),
            ERR_QUORUM_NOT_MET
        );
    }

    /// Starts a fresh approval cycle; approvals from the finished cycle no
    /// longer count.
    fn reset_approvals(&self, target: &ManagedAddress) {
        let cycle = self.withdrawal_cycle(target).get();
        self.approvers(target, cycle).clear();
        self.withdrawal_cycle(target).set(cycle + 1);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getApprovalCount)]
    fn get_approval_count(&self, target: ManagedAddress) -> u64 {
        self.approval_count(&target)
    }

    #[view(hasApproved)]
    fn has_approved(&self, target: ManagedAddress, approver: ManagedAddress) -> bool {
        let cycle = self.withdrawal_cycle(&target).get();
        self.approvers(&target, cycle).contains(&approver)
    }

    #[view(getRequiredApprovals)]
    fn get_required_approvals(&self) -> u64 {
        self.required_approvals()
    }

    #[view(getWithdrawalCycle)]
    fn get_withdrawal_cycle(&self, target: ManagedAddress) -> u64 {
        self.withdrawal_cycle(&target).get()
    }
}
