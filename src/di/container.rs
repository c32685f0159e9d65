use std::sync::Arc;

use anyhow::Result;

use crate::catalog::mock_data::{ETH_SYMBOL, USDC_SYMBOL};
use crate::catalog::{
    InMemoryStakingPoolRepository, InMemoryTransactionRepository, StakingPoolRepository,
    StaticTokenRepository, TokenRepository, TransactionRepository,
};
use crate::config::AppConfig;
use crate::entity::SwapForm;
use crate::interactor::portfolio_interactor::PortfolioInteractorImpl;
use crate::interactor::quote_interactor::{QuoteInteractorImpl, QuoteParams};
use crate::interactor::staking_interactor::StakingInteractorImpl;
use crate::interactor::swap_interactor::SwapInteractorImpl;
use crate::interactor::wallet_interactor::WalletInteractorImpl;
use crate::presenter::portfolio_presenter::{PortfolioPresenter, PortfolioPresenterImpl};
use crate::presenter::staking_presenter::{StakingPresenter, StakingPresenterImpl};
use crate::presenter::swap_presenter::{SwapPresenter, SwapPresenterImpl};
use crate::presenter::wallet_presenter::{WalletPresenter, WalletPresenterImpl};
use crate::services::{SettlementService, SimulatedSettlementService};
use crate::view::notifier::{ConsoleNotifier, Notifier};
use crate::view::portfolio_view::ConsolePortfolioView;
use crate::view::staking_view::ConsoleStakingView;
use crate::view::swap_view::ConsoleSwapView;
use crate::view::wallet_view::ConsoleWalletView;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Catalog
    pool_repository: Arc<dyn StakingPoolRepository + Send + Sync>,
    transaction_repository: Arc<dyn TransactionRepository + Send + Sync>,

    // Presenters own the flow state, so they live as long as the container
    swap_presenter: Arc<dyn SwapPresenter>,
    staking_presenter: Arc<dyn StakingPresenter>,
    portfolio_presenter: Arc<dyn PortfolioPresenter>,
    wallet_presenter: Arc<dyn WalletPresenter>,
}

impl ServiceContainer {
    /// Create a new service container backed by the built-in catalog
    pub async fn new(config: AppConfig) -> Result<Self> {
        let settlement_service = Arc::new(SimulatedSettlementService::new(config.settlement_delay()))
            as Arc<dyn SettlementService + Send + Sync>;
        let notifier = Arc::new(ConsoleNotifier::new()) as Arc<dyn Notifier + Send + Sync>;

        Self::with_services(config, settlement_service, notifier).await
    }

    /// Same wiring with a custom settlement backend and notifier
    pub async fn with_services(
        config: AppConfig,
        settlement_service: Arc<dyn SettlementService + Send + Sync>,
        notifier: Arc<dyn Notifier + Send + Sync>,
    ) -> Result<Self> {
        // Initialize repositories
        let token_repository =
            Arc::new(StaticTokenRepository::new()) as Arc<dyn TokenRepository + Send + Sync>;
        let pool_repository = Arc::new(InMemoryStakingPoolRepository::new())
            as Arc<dyn StakingPoolRepository + Send + Sync>;
        let transaction_repository = Arc::new(InMemoryTransactionRepository::new())
            as Arc<dyn TransactionRepository + Send + Sync>;

        let initial_form = SwapForm::new(
            token_repository.get_token_by_symbol(ETH_SYMBOL).await?,
            token_repository.get_token_by_symbol(USDC_SYMBOL).await?,
            config.default_slippage_percent,
        );

        let quote_interactor = Arc::new(QuoteInteractorImpl::new(
            token_repository.clone(),
            QuoteParams::from_config(&config),
        ));
        let swap_interactor = Arc::new(SwapInteractorImpl::new(
            quote_interactor,
            settlement_service.clone(),
            transaction_repository.clone(),
            config.settlement_timeout(),
        ));
        let swap_presenter = Arc::new(SwapPresenterImpl::new(
            swap_interactor,
            Arc::new(ConsoleSwapView::new()),
            notifier.clone(),
            initial_form,
        )) as Arc<dyn SwapPresenter>;

        let staking_interactor = Arc::new(StakingInteractorImpl::new(
            pool_repository.clone(),
            settlement_service,
            transaction_repository.clone(),
            config.settlement_timeout(),
        ));
        let staking_presenter = Arc::new(StakingPresenterImpl::new(
            staking_interactor,
            Arc::new(ConsoleStakingView::new()),
            notifier.clone(),
        )) as Arc<dyn StakingPresenter>;

        let portfolio_interactor = Arc::new(PortfolioInteractorImpl::new(
            token_repository,
            transaction_repository.clone(),
        ));
        let portfolio_presenter = Arc::new(PortfolioPresenterImpl::new(
            portfolio_interactor,
            Arc::new(ConsolePortfolioView::new()),
        )) as Arc<dyn PortfolioPresenter>;

        let wallet_presenter = Arc::new(WalletPresenterImpl::new(
            Arc::new(WalletInteractorImpl::new()),
            Arc::new(ConsoleWalletView::new()),
            notifier,
        )) as Arc<dyn WalletPresenter>;

        Ok(Self {
            pool_repository,
            transaction_repository,
            swap_presenter,
            staking_presenter,
            portfolio_presenter,
            wallet_presenter,
        })
    }

    // Accessor methods

    pub fn pool_repository(&self) -> Arc<dyn StakingPoolRepository + Send + Sync> {
        self.pool_repository.clone()
    }

    pub fn transaction_repository(&self) -> Arc<dyn TransactionRepository + Send + Sync> {
        self.transaction_repository.clone()
    }

    pub fn swap_presenter(&self) -> Arc<dyn SwapPresenter> {
        self.swap_presenter.clone()
    }

    pub fn staking_presenter(&self) -> Arc<dyn StakingPresenter> {
        self.staking_presenter.clone()
    }

    pub fn portfolio_presenter(&self) -> Arc<dyn PortfolioPresenter> {
        self.portfolio_presenter.clone()
    }

    pub fn wallet_presenter(&self) -> Arc<dyn WalletPresenter> {
        self.wallet_presenter.clone()
    }
}
